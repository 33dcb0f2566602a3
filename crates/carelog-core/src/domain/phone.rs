use crate::error::ValidationError;

pub const PHONE_DIGITS: usize = 11;
pub const PHONE_PREFIX: &str = "07";

/// UK mobile format: exactly 11 digits starting 07. The value is stored
/// exactly as entered, so no trimming happens here.
pub fn validate_phone(value: &str) -> Result<String, ValidationError> {
    let valid = value.len() == PHONE_DIGITS
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.starts_with(PHONE_PREFIX);
    if !valid {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::validate_phone;

    #[test]
    fn phone_accepts_eleven_digits_starting_07() {
        let value = validate_phone("07123456789").unwrap();
        assert_eq!(value, "07123456789");
    }

    #[test]
    fn phone_rejects_wrong_prefix() {
        assert!(validate_phone("08123456789").is_err());
    }

    #[test]
    fn phone_rejects_wrong_length() {
        assert!(validate_phone("0712345678").is_err());
        assert!(validate_phone("071234567890").is_err());
    }

    #[test]
    fn phone_rejects_non_digits_and_whitespace() {
        assert!(validate_phone("07123 45678").is_err());
        assert!(validate_phone("0712345678a").is_err());
        assert!(validate_phone(" 07123456789").is_err());
    }
}
