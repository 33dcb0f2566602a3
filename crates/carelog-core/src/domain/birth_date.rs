use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::rules::age::{age_on, MAX_AGE_YEARS};

pub const BIRTH_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parses the date and checks the implied age against `today`. Time is a
/// parameter so the rule stays pure; callers pass the current local date.
pub fn validate_birth_date(value: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField {
            field: "birth date".to_string(),
        });
    }

    let date = parse_birth_date(trimmed)
        .ok_or_else(|| ValidationError::InvalidDate(trimmed.to_string()))?;

    let age = age_on(date, today);
    if !(0..=MAX_AGE_YEARS).contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(date)
}

pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    BIRTH_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}
