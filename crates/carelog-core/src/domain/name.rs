use crate::error::ValidationError;

pub const FIRST_NAME_MIN: usize = 2;
pub const FIRST_NAME_MAX: usize = 12;
pub const LAST_NAME_MIN: usize = 2;
pub const LAST_NAME_MAX: usize = 20;

/// Trims and checks the length bound. The trimmed value is the canonical
/// form; calling this again on its own output is a no-op.
pub fn validate_first_name(value: &str, label: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();
    if length < FIRST_NAME_MIN || length > FIRST_NAME_MAX {
        return Err(ValidationError::LengthOutOfRange {
            field: label.to_string(),
            min: FIRST_NAME_MIN,
            max: FIRST_NAME_MAX,
        });
    }
    Ok(trimmed.to_string())
}

/// Length, then shape, then punctuation rules, each reported separately and
/// in this order: letter endpoints and charset, doubled punctuation, hyphen
/// count, apostrophe count.
pub fn validate_last_name(value: &str, label: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() < LAST_NAME_MIN || chars.len() > LAST_NAME_MAX {
        return Err(ValidationError::LengthOutOfRange {
            field: label.to_string(),
            min: LAST_NAME_MIN,
            max: LAST_NAME_MAX,
        });
    }

    let endpoints_ok = chars.first().is_some_and(|ch| ch.is_ascii_alphabetic())
        && chars.last().is_some_and(|ch| ch.is_ascii_alphabetic());
    if !endpoints_ok || !chars.iter().all(|ch| is_name_char(*ch)) {
        return Err(ValidationError::NamePattern {
            field: label.to_string(),
        });
    }

    if chars
        .windows(2)
        .any(|pair| is_name_punct(pair[0]) && is_name_punct(pair[1]))
    {
        return Err(ValidationError::DoubledPunctuation {
            field: label.to_string(),
        });
    }

    if chars.iter().filter(|ch| **ch == '-').count() > 1 {
        return Err(ValidationError::TooManyHyphens {
            field: label.to_string(),
        });
    }

    if chars.iter().filter(|ch| **ch == '\'').count() > 2 {
        return Err(ValidationError::TooManyApostrophes {
            field: label.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || is_name_punct(ch)
}

fn is_name_punct(ch: char) -> bool {
    ch == '\'' || ch == '-'
}

#[cfg(test)]
mod tests {
    use super::{validate_first_name, validate_last_name};
    use crate::error::ValidationError;

    #[test]
    fn first_name_trims_and_accepts() {
        let value = validate_first_name("  Ada ", "first name").unwrap();
        assert_eq!(value, "Ada");
    }

    #[test]
    fn first_name_rejects_out_of_range_lengths() {
        assert!(validate_first_name("A", "first name").is_err());
        assert!(validate_first_name("Maximiliandra", "first name").is_err());
    }

    #[test]
    fn first_name_is_idempotent() {
        let once = validate_first_name("  Grace  ", "first name").unwrap();
        let twice = validate_first_name(&once, "first name").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn last_name_accepts_hyphen_and_apostrophes() {
        let value = validate_last_name("O'Brien-Smith", "last name").unwrap();
        assert_eq!(value, "O'Brien-Smith");
    }

    #[test]
    fn last_name_rejects_doubled_punctuation() {
        let err = validate_last_name("O''Brien", "last name").unwrap_err();
        assert!(matches!(err, ValidationError::DoubledPunctuation { .. }));
        let err = validate_last_name("Smith-'Jones", "last name").unwrap_err();
        assert!(matches!(err, ValidationError::DoubledPunctuation { .. }));
    }

    #[test]
    fn last_name_rejects_multiple_hyphens() {
        let err = validate_last_name("Ab-Cd-Ef", "last name").unwrap_err();
        assert!(matches!(err, ValidationError::TooManyHyphens { .. }));
    }

    #[test]
    fn last_name_rejects_three_apostrophes() {
        let err = validate_last_name("A'b'c'd", "last name").unwrap_err();
        assert!(matches!(err, ValidationError::TooManyApostrophes { .. }));
    }

    #[test]
    fn last_name_rejects_punctuation_endpoints_and_digits() {
        let err = validate_last_name("-Smith", "last name").unwrap_err();
        assert!(matches!(err, ValidationError::NamePattern { .. }));
        let err = validate_last_name("Smith'", "last name").unwrap_err();
        assert!(matches!(err, ValidationError::NamePattern { .. }));
        let err = validate_last_name("Sm1th", "last name").unwrap_err();
        assert!(matches!(err, ValidationError::NamePattern { .. }));
    }

    #[test]
    fn last_name_reports_length_before_pattern() {
        let err = validate_last_name("-", "last name").unwrap_err();
        assert!(matches!(err, ValidationError::LengthOutOfRange { .. }));
    }
}
