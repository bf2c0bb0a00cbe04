//! Shared validation helpers

use crate::errors::{ValidationError, ValidationResult};

/// Check that a value lies within `[min, max]`
///
/// Bounds are inclusive: only a strict `<`/`>` violation fails. Boundary
/// readings are in range by the business rule.
pub fn check_range(value: f32, min: f32, max: f32) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ValidationError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range(5.0, 0.0, 10.0).is_ok());
        assert!(check_range(-0.1, 0.0, 10.0).is_err());
        assert!(check_range(10.1, 0.0, 10.0).is_err());
    }

    #[test]
    fn boundaries_are_in_range() {
        assert!(check_range(0.0, 0.0, 10.0).is_ok());
        assert!(check_range(10.0, 0.0, 10.0).is_ok());
    }
}
