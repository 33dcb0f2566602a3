use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ids::PatientId;
use crate::domain::patient::Patient;
use crate::rules::age::age_on;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientListItemDto {
    pub id: PatientId,
    pub full_name: String,
    pub age: i32,
    pub bmi: f64,
    pub bmi_category: String,
}

impl PatientListItemDto {
    pub fn from_patient(patient: &Patient, today: NaiveDate) -> Self {
        Self {
            id: patient.id,
            full_name: patient.contact.full_name(),
            age: age_on(patient.contact.birth_date, today),
            bmi: patient.contact.bmi,
            bmi_category: patient.bmi_category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientDetailDto {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub emails: Vec<String>,
    pub birth_date: String,
    pub age: i32,
    pub gender: Option<String>,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub bmi_category: String,
    pub health_notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PatientDetailDto {
    /// `date_pattern` is a chrono format string; surfaces pick it from their
    /// display configuration.
    pub fn from_patient(patient: &Patient, today: NaiveDate, date_pattern: &str) -> Self {
        let contact = &patient.contact;
        Self {
            id: patient.id,
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            phone: contact.phone.clone(),
            emails: contact.emails.clone(),
            birth_date: contact.birth_date.format(date_pattern).to_string(),
            age: age_on(contact.birth_date, today),
            gender: contact.gender.clone(),
            height_cm: contact.height_cm,
            weight_kg: contact.weight_kg,
            bmi: contact.bmi,
            bmi_category: patient.bmi_category.clone(),
            health_notes: contact.health_notes.clone(),
            created_at: patient.created_at,
            updated_at: patient.updated_at,
        }
    }
}
