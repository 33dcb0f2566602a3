use anyhow::{anyhow, Result};
use carelog_core::domain::PatientId;
use chrono::{Local, NaiveDate, Utc};
use std::str::FromStr;

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_patient_id(raw: &str) -> Result<PatientId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("patient id cannot be empty"));
    }
    PatientId::from_str(trimmed).map_err(|_| anyhow!("invalid patient id"))
}

/// Empty flag values mean "clear this optional field".
pub fn normalize_optional_value(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
