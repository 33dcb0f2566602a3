use crate::error::ValidationError;

pub const HEIGHT_MIN_CM: f64 = 30.0;
pub const HEIGHT_MAX_CM: f64 = 200.0;
pub const WEIGHT_MIN_KG: f64 = 1.0;
pub const WEIGHT_MAX_KG: f64 = 200.0;

pub fn validate_height(value: f64) -> Result<f64, ValidationError> {
    validate_measurement(value, "height", HEIGHT_MIN_CM, HEIGHT_MAX_CM, "cm")
}

pub fn validate_weight(value: f64) -> Result<f64, ValidationError> {
    validate_measurement(value, "weight", WEIGHT_MIN_KG, WEIGHT_MAX_KG, "kg")
}

/// Raw form fields arrive as strings; a value that does not parse to a
/// finite number is a type error, not a range error.
pub fn parse_measurement(raw: &str, field: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::TypeMismatch {
            field: field.to_string(),
        })
}

fn validate_measurement(
    value: f64,
    field: &str,
    min: f64,
    max: f64,
    unit: &'static str,
) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::TypeMismatch {
            field: field.to_string(),
        });
    }
    if value < min || value > max {
        return Err(ValidationError::MeasurementOutOfRange {
            field: field.to_string(),
            min,
            max,
            unit,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{parse_measurement, validate_height, validate_weight};
    use crate::error::{ValidationError, ValidationKind};

    #[test]
    fn height_accepts_bounds_inclusive() {
        assert_eq!(validate_height(30.0).unwrap(), 30.0);
        assert_eq!(validate_height(200.0).unwrap(), 200.0);
        assert_eq!(validate_height(170.5).unwrap(), 170.5);
    }

    #[test]
    fn height_rejects_out_of_range() {
        assert!(validate_height(29.9).is_err());
        assert!(validate_height(200.1).is_err());
    }

    #[test]
    fn weight_accepts_bounds_inclusive() {
        assert_eq!(validate_weight(1.0).unwrap(), 1.0);
        assert_eq!(validate_weight(200.0).unwrap(), 200.0);
    }

    #[test]
    fn weight_rejects_out_of_range() {
        assert!(validate_weight(0.5).is_err());
        assert!(validate_weight(250.0).is_err());
    }

    #[test]
    fn non_finite_values_are_type_errors() {
        let err = validate_height(f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ValidationKind::TypeMismatch);
        let err = validate_weight(f64::INFINITY).unwrap_err();
        assert_eq!(err.kind(), ValidationKind::TypeMismatch);
    }

    #[test]
    fn parse_measurement_accepts_numeric_strings() {
        assert_eq!(parse_measurement(" 172.5 ", "height").unwrap(), 172.5);
        assert_eq!(parse_measurement("80", "weight").unwrap(), 80.0);
    }

    #[test]
    fn parse_measurement_rejects_non_numeric() {
        let err = parse_measurement("tall", "height").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                field: "height".to_string()
            }
        );
        assert!(parse_measurement("", "weight").is_err());
        assert!(parse_measurement("NaN", "weight").is_err());
    }
}
