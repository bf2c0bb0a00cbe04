//! Range Validators for Sensor Readings
//!
//! ## Overview
//!
//! Each sensor type carries a business-rule range; readings inside it are
//! recorded, readings outside it raise an alert. The bounds are inclusive:
//! the alert condition is a strict `<` or `>` comparison, so a reading
//! sitting exactly on a boundary is in range.
//!
//! | Sensor      | Range          | Unit |
//! |-------------|----------------|------|
//! | Temperature | [20.0, 31.6]   | °C   |
//! | pH          | [6.0, 8.0]     | pH   |
//!
//! The defaults encode those ranges; both validators also accept custom
//! limits for deployments with different tolerances.
//!
//! ## Usage
//!
//! ```rust
//! use aquamon::validators::{TemperatureValidator, Validator};
//!
//! let validator = TemperatureValidator::default();
//! assert!(validator.validate(25.0).is_ok());
//! assert!(validator.validate(35.0).is_err());
//! ```

mod ph;
mod temperature;
mod utils;

pub use ph::PhValidator;
pub use temperature::TemperatureValidator;

use crate::errors::ValidationResult;

/// Core validator trait, one implementation per sensor type
pub trait Validator {
    /// Validate a single reading
    fn validate(&self, value: f32) -> ValidationResult<()>;

    /// Acceptable range enforced by this validator
    fn constraints(&self) -> RangeConstraints;
}

/// Acceptable range for a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeConstraints {
    /// Lower bound (inclusive)
    pub min: f32,
    /// Upper bound (inclusive)
    pub max: f32,
    /// Unit of measurement, for diagnostics
    pub unit: &'static str,
}
