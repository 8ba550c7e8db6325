//! Common behaviour of objects placed in a building.

use eyre::WrapErr;
use serde::Serialize;

use crate::error::{LiftError, Result};

/// Height of one storey in metres.
pub const FLOOR_HEIGHT_M: f64 = 3.0;

/// Product of all lengths, folded from the front.
///
/// `[]` has no volume (`None`); a single length is returned as is.
pub fn volume(dimensions: &[f64]) -> Option<f64> {
    match dimensions {
        [] => None,
        [last] => Some(*last),
        [first, rest @ ..] => volume(rest).map(|v| first * v),
    }
}

pub trait BuildingObject: Serialize {
    /// Public attribute names, in declaration (and serialization) order.
    const ATTRIBUTES: &'static [&'static str];

    /// Value of a declared attribute, `None` when the name is not declared.
    fn attribute(&self, name: &str) -> Option<serde_json::Value>;

    /// Value of the named public attribute. Unknown names are an error.
    fn get_params(&self, name: &str) -> Result<serde_json::Value> {
        self.attribute(name)
            .ok_or_else(|| eyre::Report::new(LiftError::UnknownAttribute(name.to_string())))
    }

    /// Volume spanned by `dimensions`; see [`volume`].
    fn volume_of(&self, dimensions: &[f64]) -> Option<f64> {
        volume(dimensions)
    }

    /// All public attributes as a single JSON line.
    fn to_text(&self) -> Result<String> {
        serde_json::to_string(self).wrap_err("serialize building object")
    }
}

#[cfg(test)]
mod tests {
    use super::volume;

    #[test]
    fn volume_edge_cases() {
        assert_eq!(volume(&[]), None);
        assert_eq!(volume(&[7.5]), Some(7.5));
        assert_eq!(volume(&[2.0, 3.0, 4.0]), Some(24.0));
        assert_eq!(volume(&[2.0, 0.0, 4.0]), Some(0.0));
    }
}
