use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::birth_date::validate_birth_date;
use crate::domain::email::validate_emails;
use crate::domain::ids::PatientId;
use crate::domain::measurements::{parse_measurement, validate_height, validate_weight};
use crate::domain::name::{validate_first_name, validate_last_name};
use crate::domain::phone::validate_phone;
use crate::error::ValidationError;
use crate::rules::biometrics::{bmi_category, calculate_bmi};

/// Raw form input. Any field may be empty or malformed; nothing here has
/// been checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub emails: Vec<String>,
    pub birth_date: String,
    pub gender: Option<String>,
    pub height: String,
    pub weight: String,
    pub health_notes: Option<String>,
}

impl PatientDraft {
    /// Runs every field validator against `today`, stopping at the first
    /// failure, then derives the BMI from the accepted measurements. The BMI
    /// is never taken from input.
    pub fn validate(&self, today: NaiveDate) -> Result<ValidatedPatient, ValidationError> {
        let first_name = validate_first_name(&self.first_name, "first name")?;
        let last_name = validate_last_name(&self.last_name, "last name")?;
        let phone = validate_phone(&self.phone)?;
        let emails = validate_emails(&self.emails)?;
        let birth_date = validate_birth_date(&self.birth_date, today)?;
        let height_cm = validate_height(parse_measurement(&self.height, "height")?)?;
        let weight_kg = validate_weight(parse_measurement(&self.weight, "weight")?)?;
        let bmi = calculate_bmi(weight_kg, height_cm)?;

        Ok(ValidatedPatient {
            first_name,
            last_name,
            phone,
            emails,
            birth_date,
            gender: self.gender.clone(),
            height_cm,
            weight_kg,
            health_notes: self.health_notes.clone(),
            bmi,
        })
    }
}

/// The outcome of successful validation: canonicalized fields plus the
/// derived BMI. Gender and health notes pass through unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedPatient {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub emails: Vec<String>,
    pub birth_date: NaiveDate,
    pub gender: Option<String>,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub health_notes: Option<String>,
    pub bmi: f64,
}

impl ValidatedPatient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Persisted record: a validated contact with a generated identifier and the
/// category label derived from its BMI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    #[serde(flatten)]
    pub contact: ValidatedPatient,
    pub bmi_category: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Patient {
    pub fn new(contact: ValidatedPatient, now_utc: i64) -> Self {
        let bmi_category = bmi_category(contact.bmi).to_string();
        Self {
            id: PatientId::new(),
            contact,
            bmi_category,
            created_at: now_utc,
            updated_at: now_utc,
        }
    }

    /// Full-field replace: the identifier and creation time survive, every
    /// contact field is swapped, and the category is rederived.
    pub fn replace_contact(&mut self, contact: ValidatedPatient, now_utc: i64) {
        self.bmi_category = bmi_category(contact.bmi).to_string();
        self.contact = contact;
        self.updated_at = now_utc;
    }
}
