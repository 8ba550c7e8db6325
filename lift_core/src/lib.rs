#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core lift logic (hardware-agnostic).
//!
//! Travel goes through the `lift_traits::Drive` trait; the car itself only
//! decides direction, enforces the shaft bounds and keeps its state.
//!
//! ## Architecture
//!
//! - **Parameters**: restricted bulk assignment (`params` module)
//! - **Building objects**: attribute access, JSON text, volume (`building`)
//! - **Capabilities**: `Driven`, `Lifting`, `Geometry` (`capabilities`)
//! - **Lift**: call-to-floor state machine (`lift`)
//! - **Status**: outcome of one call (`status`)

pub mod builder;
pub mod building;
pub mod capabilities;
pub mod conversions;
pub mod error;
pub mod hw_error;
pub mod lift;
pub mod mocks;
pub mod params;
pub mod status;

pub use builder::LiftBuilder;
pub use building::{BuildingObject, FLOOR_HEIGHT_M, volume};
pub use capabilities::{Driven, Geometry, Lifting};
pub use error::{BuildError, LiftError, MovementError};
pub use lift::{Lift, MAX_LEVEL_UP, MIN_LEVEL_DOWN};
pub use params::{LiftOptions, ParamValue, ParameterSet};
pub use status::CallStatus;
