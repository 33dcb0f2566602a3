use crate::error::ValidationError;

pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_NORMAL_BELOW: f64 = 25.0;
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;

/// BMI = weight(kg) / height(m)^2, rounded to one decimal. The category
/// bands are defined over this rounded value, so rounding happens here and
/// nowhere else.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, ValidationError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(ValidationError::InvalidMeasurement {
            field: "weight".to_string(),
        });
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(ValidationError::InvalidMeasurement {
            field: "height".to_string(),
        });
    }
    let height_m = height_cm / 100.0;
    Ok(round_to_tenth(weight_kg / (height_m * height_m)))
}

/// Category for a BMI already rounded to one decimal. `< 25.0` is the same
/// set as `<= 24.9` for such values and avoids float-literal equality.
pub fn bmi_category(bmi: f64) -> &'static str {
    if !bmi.is_finite() {
        return "Unknown";
    }
    if bmi < BMI_UNDERWEIGHT_BELOW {
        "Underweight (<18.5)"
    } else if bmi < BMI_NORMAL_BELOW {
        "Normal (18.5-24.9)"
    } else if bmi < BMI_OVERWEIGHT_BELOW {
        "Overweight (25.0-29.9)"
    } else {
        "Obese (>=30)"
    }
}

// f64::round rounds half away from zero, which is the fixed-point rule the
// category boundaries assume.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::{bmi_category, calculate_bmi};
    use crate::error::{ValidationError, ValidationKind};

    #[test]
    fn bmi_rounds_to_one_decimal() {
        // 74.5 / 1.70^2 = 25.778..., rounds up to 25.8
        assert_eq!(calculate_bmi(74.5, 170.0).unwrap(), 25.8);
        // 60 / 1.65^2 = 22.038..., rounds down to 22.0
        assert_eq!(calculate_bmi(60.0, 165.0).unwrap(), 22.0);
    }

    #[test]
    fn bmi_boundary_values_land_in_expected_bands() {
        assert_eq!(bmi_category(calculate_bmi(74.5, 170.0).unwrap()), "Overweight (25.0-29.9)");
        assert_eq!(bmi_category(calculate_bmi(60.0, 165.0).unwrap()), "Normal (18.5-24.9)");
    }

    #[test]
    fn bmi_rejects_non_positive_inputs() {
        let err = calculate_bmi(0.0, 170.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidMeasurement {
                field: "weight".to_string()
            }
        );
        let err = calculate_bmi(70.0, -1.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidMeasurement {
                field: "height".to_string()
            }
        );
    }

    #[test]
    fn bmi_rejects_non_finite_inputs() {
        let err = calculate_bmi(f64::NAN, 170.0).unwrap_err();
        assert_eq!(err.kind(), ValidationKind::InvalidMeasurement);
        assert!(calculate_bmi(70.0, f64::INFINITY).is_err());
    }

    #[test]
    fn category_bands_are_contiguous_at_one_decimal() {
        assert_eq!(bmi_category(18.4), "Underweight (<18.5)");
        assert_eq!(bmi_category(18.5), "Normal (18.5-24.9)");
        assert_eq!(bmi_category(24.9), "Normal (18.5-24.9)");
        assert_eq!(bmi_category(25.0), "Overweight (25.0-29.9)");
        assert_eq!(bmi_category(29.9), "Overweight (25.0-29.9)");
        assert_eq!(bmi_category(30.0), "Obese (>=30)");
        assert_eq!(bmi_category(45.0), "Obese (>=30)");
    }

    #[test]
    fn category_degrades_to_unknown_for_non_finite() {
        assert_eq!(bmi_category(f64::NAN), "Unknown");
        assert_eq!(bmi_category(f64::INFINITY), "Unknown");
    }

    #[test]
    fn category_is_never_unknown_for_valid_measurements() {
        for weight in [1.0, 25.0, 60.0, 74.5, 120.0, 200.0] {
            for height in [30.0, 100.0, 165.0, 170.0, 200.0] {
                let bmi = calculate_bmi(weight, height).unwrap();
                assert_ne!(bmi_category(bmi), "Unknown");
            }
        }
    }

    #[test]
    fn bmi_is_deterministic() {
        let first = calculate_bmi(82.3, 178.0).unwrap();
        let second = calculate_bmi(82.3, 178.0).unwrap();
        assert_eq!(first, second);
    }
}
