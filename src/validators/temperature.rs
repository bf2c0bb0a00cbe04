//! Temperature validator
//!
//! Validates water temperature readings in Celsius against the acceptable
//! range for the monitored environment. The default bounds come from the
//! operating rules of the deployment (20.0 °C to 31.6 °C) and are inclusive
//! at both ends.

use crate::{
    errors::{ValidationError, ValidationResult},
    validators::{utils, RangeConstraints, Validator},
};

/// Temperature validator for Celsius readings
#[derive(Debug, Clone)]
pub struct TemperatureValidator {
    /// Minimum acceptable temperature in Celsius
    min_celsius: f32,

    /// Maximum acceptable temperature in Celsius
    max_celsius: f32,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self {
            // Operating range for the monitored environment. Boundary values
            // are in range; only strict violations alert.
            min_celsius: 20.0,
            max_celsius: 31.6,
        }
    }
}

impl TemperatureValidator {
    /// Create a validator with custom limits
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_celsius: min.max(-273.15), // Can't go below absolute zero
            max_celsius: max,
        }
    }
}

impl Validator for TemperatureValidator {
    fn validate(&self, value: f32) -> ValidationResult<()> {
        // First check: is it even a valid number?
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue);
        }

        utils::check_range(value, self.min_celsius, self.max_celsius)
    }

    fn constraints(&self) -> RangeConstraints {
        RangeConstraints {
            min: self.min_celsius,
            max: self.max_celsius,
            unit: "°C",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_temperature() {
        let validator = TemperatureValidator::default();
        assert!(validator.validate(25.0).is_ok());
    }

    #[test]
    fn boundaries_are_in_range() {
        let validator = TemperatureValidator::default();
        assert!(validator.validate(20.0).is_ok());
        assert!(validator.validate(31.6).is_ok());
    }

    #[test]
    fn temperature_out_of_range() {
        let validator = TemperatureValidator::default();
        assert!(matches!(
            validator.validate(35.0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validator.validate(19.9).is_err());
    }

    #[test]
    fn non_finite_is_invalid() {
        let validator = TemperatureValidator::default();
        assert_eq!(validator.validate(f32::NAN), Err(ValidationError::InvalidValue));
        assert_eq!(validator.validate(f32::INFINITY), Err(ValidationError::InvalidValue));
    }

    #[test]
    fn custom_limits_normalize() {
        // Reversed bounds are swapped rather than rejected.
        let validator = TemperatureValidator::new_with_limits(30.0, 10.0);
        let constraints = validator.constraints();
        assert_eq!(constraints.min, 10.0);
        assert_eq!(constraints.max, 30.0);
    }
}
