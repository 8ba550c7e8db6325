use thiserror::Error;

#[derive(Debug, Error)]
pub enum HwError {
    #[error("drive fault: {0}")]
    Fault(String),
    #[error("drive jammed after {steps} floor(s)")]
    Jammed { steps: usize },
}

pub type Result<T> = std::result::Result<T, HwError>;
