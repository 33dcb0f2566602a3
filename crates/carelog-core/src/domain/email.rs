use crate::error::ValidationError;

/// Shape check only: a non-empty local part, one `@`, and a domain with an
/// interior dot; no whitespace anywhere. The value is returned unchanged.
pub fn validate_email(value: &str) -> Result<String, ValidationError> {
    if !has_email_shape(value) {
        return Err(ValidationError::InvalidEmail(value.to_string()));
    }
    Ok(value.to_string())
}

/// A record carries one or more addresses; each must pass on its own and
/// validation stops at the first failure.
pub fn validate_emails(values: &[String]) -> Result<Vec<String>, ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::MissingField {
            field: "email".to_string(),
        });
    }
    values.iter().map(|value| validate_email(value)).collect()
}

fn has_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(index, byte)| byte == b'.' && index > 0 && index + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::{validate_email, validate_emails};
    use crate::error::ValidationError;

    #[test]
    fn email_accepts_basic_shapes() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("a.b+c@mail.example.co.uk").is_ok());
    }

    #[test]
    fn email_rejects_missing_parts() {
        assert!(validate_email("ada").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("ada@example").is_err());
    }

    #[test]
    fn email_rejects_dot_at_domain_edges() {
        assert!(validate_email("ada@.com").is_err());
        assert!(validate_email("ada@example.").is_err());
    }

    #[test]
    fn email_rejects_whitespace_and_double_at() {
        assert!(validate_email("ada lovelace@example.com").is_err());
        assert!(validate_email("ada@ex@ample.com").is_err());
    }

    #[test]
    fn emails_require_at_least_one() {
        let err = validate_emails(&[]).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { .. }));
    }

    #[test]
    fn emails_stop_at_first_failure() {
        let values = vec![
            "ada@example.com".to_string(),
            "broken".to_string(),
            "also broken".to_string(),
        ];
        let err = validate_emails(&values).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("broken".to_string()));
    }

    #[test]
    fn emails_pass_through_unchanged() {
        let values = vec!["Ada@Example.com".to_string()];
        let validated = validate_emails(&values).unwrap();
        assert_eq!(validated, values);
    }
}
