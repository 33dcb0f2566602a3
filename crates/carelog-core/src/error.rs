use thiserror::Error;

/// A single field validation failure. Each variant carries enough context to
/// render a user-facing message naming the field and the violated constraint.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a number")]
    TypeMismatch { field: String },
    #[error("{field} must be between {min} and {max} characters long")]
    LengthOutOfRange {
        field: String,
        min: usize,
        max: usize,
    },
    #[error("{field} must start and end with a letter and contain only letters, apostrophes or a hyphen")]
    NamePattern { field: String },
    #[error("{field} must not contain consecutive hyphens or apostrophes")]
    DoubledPunctuation { field: String },
    #[error("{field} may contain at most one hyphen")]
    TooManyHyphens { field: String },
    #[error("{field} may contain at most two apostrophes")]
    TooManyApostrophes { field: String },
    #[error("phone number must be 11 digits and start with 07")]
    InvalidPhone,
    #[error("invalid email address format: {0}")]
    InvalidEmail(String),
    #[error("{field} must be between {min} {unit} and {max} {unit}")]
    MeasurementOutOfRange {
        field: String,
        min: f64,
        max: f64,
        unit: &'static str,
    },
    #[error("{field} is required")]
    MissingField { field: String },
    #[error("invalid birth date: {0}")]
    InvalidDate(String),
    #[error("age must be between 0 and 120 years (got {0})")]
    AgeOutOfRange(i32),
    #[error("{field} must be a positive number")]
    InvalidMeasurement { field: String },
}

/// Constraint taxonomy behind the concrete variants, for callers that route
/// on the class of failure rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    TypeMismatch,
    LengthOutOfRange,
    PatternViolation,
    RangeViolation,
    MissingField,
    InvalidDate,
    InvalidMeasurement,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationKind {
        match self {
            ValidationError::TypeMismatch { .. } => ValidationKind::TypeMismatch,
            ValidationError::LengthOutOfRange { .. } => ValidationKind::LengthOutOfRange,
            ValidationError::NamePattern { .. }
            | ValidationError::DoubledPunctuation { .. }
            | ValidationError::TooManyHyphens { .. }
            | ValidationError::TooManyApostrophes { .. }
            | ValidationError::InvalidPhone
            | ValidationError::InvalidEmail(_) => ValidationKind::PatternViolation,
            ValidationError::MeasurementOutOfRange { .. } | ValidationError::AgeOutOfRange(_) => {
                ValidationKind::RangeViolation
            }
            ValidationError::MissingField { .. } => ValidationKind::MissingField,
            ValidationError::InvalidDate(_) => ValidationKind::InvalidDate,
            ValidationError::InvalidMeasurement { .. } => ValidationKind::InvalidMeasurement,
        }
    }
}
