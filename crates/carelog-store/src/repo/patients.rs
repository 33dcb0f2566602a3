use chrono::NaiveDate;

use crate::error::{Result, StoreError};
use crate::RecordStore;
use carelog_core::domain::{Patient, PatientDraft, PatientId};

/// Field replacements for an edit. Unset fields keep their stored value; the
/// merged result is re-validated as a whole before anything is written, so a
/// record can never end up with a stale BMI or a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct PatientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub emails: Option<Vec<String>>,
    pub birth_date: Option<String>,
    pub gender: Option<Option<String>>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub health_notes: Option<Option<String>>,
}

impl PatientUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.emails.is_none()
            && self.birth_date.is_none()
            && self.gender.is_none()
            && self.height.is_none()
            && self.weight.is_none()
            && self.health_notes.is_none()
    }
}

pub struct PatientsRepo<'a> {
    backend: &'a dyn RecordStore,
}

impl<'a> PatientsRepo<'a> {
    pub fn new(backend: &'a dyn RecordStore) -> Self {
        Self { backend }
    }

    pub fn create(&self, now_utc: i64, today: NaiveDate, draft: PatientDraft) -> Result<Patient> {
        let contact = draft.validate(today)?;
        let patient = Patient::new(contact, now_utc);
        let mut patients = self.backend.load()?;
        patients.push(patient.clone());
        self.backend.save(&patients)?;
        Ok(patient)
    }

    pub fn get(&self, id: PatientId) -> Result<Option<Patient>> {
        Ok(self
            .backend
            .load()?
            .into_iter()
            .find(|patient| patient.id == id))
    }

    pub fn list(&self) -> Result<Vec<Patient>> {
        self.backend.load()
    }

    pub fn update(
        &self,
        now_utc: i64,
        today: NaiveDate,
        id: PatientId,
        update: PatientUpdate,
    ) -> Result<Patient> {
        let mut patients = self.backend.load()?;
        let index = patients
            .iter()
            .position(|patient| patient.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let draft = merged_draft(&patients[index], &update);
        let contact = draft.validate(today)?;
        patients[index].replace_contact(contact, now_utc);
        let updated = patients[index].clone();
        self.backend.save(&patients)?;
        Ok(updated)
    }

    pub fn delete(&self, id: PatientId) -> Result<()> {
        let mut patients = self.backend.load()?;
        let before = patients.len();
        patients.retain(|patient| patient.id != id);
        if patients.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.backend.save(&patients)?;
        Ok(())
    }

    /// Case-insensitive substring match over every display field. An empty
    /// query matches nothing.
    pub fn search(&self, query: &str) -> Result<Vec<Patient>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let patients = self.backend.load()?;
        Ok(patients
            .into_iter()
            .filter(|patient| search_haystack(patient).contains(&needle))
            .collect())
    }
}

/// Rebuilds the raw draft for a full-field replace: stored values fill every
/// field the update leaves unset.
fn merged_draft(current: &Patient, update: &PatientUpdate) -> PatientDraft {
    let contact = &current.contact;
    PatientDraft {
        first_name: update
            .first_name
            .clone()
            .unwrap_or_else(|| contact.first_name.clone()),
        last_name: update
            .last_name
            .clone()
            .unwrap_or_else(|| contact.last_name.clone()),
        phone: update.phone.clone().unwrap_or_else(|| contact.phone.clone()),
        emails: update
            .emails
            .clone()
            .unwrap_or_else(|| contact.emails.clone()),
        birth_date: update
            .birth_date
            .clone()
            .unwrap_or_else(|| contact.birth_date.format("%Y-%m-%d").to_string()),
        gender: update
            .gender
            .clone()
            .unwrap_or_else(|| contact.gender.clone()),
        height: update
            .height
            .clone()
            .unwrap_or_else(|| contact.height_cm.to_string()),
        weight: update
            .weight
            .clone()
            .unwrap_or_else(|| contact.weight_kg.to_string()),
        health_notes: update
            .health_notes
            .clone()
            .unwrap_or_else(|| contact.health_notes.clone()),
    }
}

fn search_haystack(patient: &Patient) -> String {
    let contact = &patient.contact;
    format!(
        "{}; {}; {}; {}; {}; {}; {}; {}; {}; {}",
        contact.first_name,
        contact.last_name,
        contact.phone,
        contact.emails.join(", "),
        contact.birth_date.format("%Y-%m-%d"),
        contact.weight_kg,
        contact.height_cm,
        contact.gender.as_deref().unwrap_or(""),
        patient.bmi_category,
        contact.health_notes.as_deref().unwrap_or(""),
    )
    .to_lowercase()
}
