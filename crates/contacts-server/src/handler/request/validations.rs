//! Request validation utilities.

use std::borrow::Cow;

use validator::ValidationError;

/// Minimum length of a non-empty phone number.
pub const PHONE_MIN_LENGTH: u64 = 10;
/// Maximum length of a phone number.
pub const PHONE_MAX_LENGTH: u64 = 20;

/// Creates a `length` validation error carrying its bounds.
pub fn length_error(min: Option<u64>, max: Option<u64>) -> ValidationError {
    let mut error = ValidationError::new("length");
    if let Some(min) = min {
        error.add_param(Cow::Borrowed("min"), &min);
    }
    if let Some(max) = max {
        error.add_param(Cow::Borrowed("max"), &max);
    }
    error
}

/// Accepts an empty phone number or one of 10 to 20 characters.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Ok(());
    }

    let length = phone.chars().count() as u64;
    if (PHONE_MIN_LENGTH..=PHONE_MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(length_error(Some(PHONE_MIN_LENGTH), Some(PHONE_MAX_LENGTH)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_phone_is_valid() {
        assert!(validate_phone("").is_ok());
    }

    #[test]
    fn phone_length_bounds() {
        assert!(validate_phone("123456789").is_err());
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("+55 11 98765-4321").is_ok());
        assert!(validate_phone(&"1".repeat(20)).is_ok());
        assert!(validate_phone(&"1".repeat(21)).is_err());
    }

    #[test]
    fn length_error_carries_bounds() {
        let error = length_error(None, Some(100));
        assert_eq!(error.code, "length");
        assert!(error.params.contains_key("max"));
        assert!(!error.params.contains_key("min"));
    }
}
