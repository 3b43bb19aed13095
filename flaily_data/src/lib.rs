//! Shared data model for FlailySnail course content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_positions};
