//! pH validator
//!
//! The default acceptable range is [6.0, 8.0], inclusive at both ends.

use crate::{
    errors::{ValidationError, ValidationResult},
    validators::{utils, RangeConstraints, Validator},
};

/// pH validator
#[derive(Debug, Clone)]
pub struct PhValidator {
    min_ph: f32,
    max_ph: f32,
}

impl Default for PhValidator {
    fn default() -> Self {
        Self {
            min_ph: 6.0,
            max_ph: 8.0,
        }
    }
}

impl PhValidator {
    /// Create a validator with custom limits, clamped to the pH scale
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_ph: min.max(0.0),
            max_ph: max.min(14.0),
        }
    }
}

impl Validator for PhValidator {
    fn validate(&self, value: f32) -> ValidationResult<()> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue);
        }

        utils::check_range(value, self.min_ph, self.max_ph)
    }

    fn constraints(&self) -> RangeConstraints {
        RangeConstraints {
            min: self.min_ph,
            max: self.max_ph,
            unit: "pH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ph() {
        let validator = PhValidator::default();
        assert!(validator.validate(7.0).is_ok());
        assert!(validator.validate(6.0).is_ok());
        assert!(validator.validate(8.0).is_ok());
    }

    #[test]
    fn ph_out_of_range() {
        let validator = PhValidator::default();
        assert!(matches!(
            validator.validate(9.0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validator.validate(5.9).is_err());
    }

    #[test]
    fn custom_limits_clamp_to_scale() {
        let validator = PhValidator::new_with_limits(-2.0, 20.0);
        let constraints = validator.constraints();
        assert_eq!(constraints.min, 0.0);
        assert_eq!(constraints.max, 14.0);
    }
}
