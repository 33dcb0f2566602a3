use carelog_core::domain::{PatientDraft, PatientId};
use carelog_store::error::StoreError;
use carelog_store::repo::PatientUpdate;
use carelog_store::Store;
use chrono::NaiveDate;
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date")
}

fn sample_draft() -> PatientDraft {
    PatientDraft {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        phone: "07123456789".to_string(),
        emails: vec!["john.doe@example.com".to_string()],
        birth_date: "1985-02-01".to_string(),
        gender: Some("Male".to_string()),
        height: "180".to_string(),
        weight: "80".to_string(),
        health_notes: None,
    }
}

#[test]
fn patient_crud_roundtrip() {
    let store = Store::open_in_memory();
    let now = 1_700_000_000;

    let patient = store
        .patients()
        .create(now, today(), sample_draft())
        .expect("create patient");
    assert_eq!(patient.contact.full_name(), "John Doe");
    assert_eq!(patient.contact.bmi, 24.7);
    assert_eq!(patient.bmi_category, "Normal (18.5-24.9)");

    let fetched = store
        .patients()
        .get(patient.id)
        .expect("get patient")
        .expect("patient exists");
    assert_eq!(fetched, patient);

    let updated = store
        .patients()
        .update(
            now + 10,
            today(),
            patient.id,
            PatientUpdate {
                weight: Some("100".to_string()),
                ..Default::default()
            },
        )
        .expect("update patient");
    assert_eq!(updated.contact.weight_kg, 100.0);
    assert_eq!(updated.contact.bmi, 30.9);
    assert_eq!(updated.bmi_category, "Obese (>=30)");
    assert_eq!(updated.id, patient.id);
    assert_eq!(updated.created_at, now);
    assert_eq!(updated.updated_at, now + 10);

    store.patients().delete(patient.id).expect("delete patient");
    let missing = store.patients().get(patient.id).expect("get patient");
    assert!(missing.is_none());
}

#[test]
fn update_rejects_invalid_replacement_field() {
    let store = Store::open_in_memory();
    let now = 1_700_000_000;
    let patient = store
        .patients()
        .create(now, today(), sample_draft())
        .expect("create patient");

    let err = store
        .patients()
        .update(
            now + 10,
            today(),
            patient.id,
            PatientUpdate {
                phone: Some("12345".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Core(_)));

    // nothing was written
    let unchanged = store
        .patients()
        .get(patient.id)
        .expect("get patient")
        .expect("patient exists");
    assert_eq!(unchanged.contact.phone, "07123456789");
}

#[test]
fn update_and_delete_unknown_id_report_not_found() {
    let store = Store::open_in_memory();
    let unknown = PatientId::new();

    let err = store
        .patients()
        .update(0, today(), unknown, PatientUpdate::default())
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let err = store.patients().delete(unknown).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn search_matches_any_field_case_insensitively() {
    let store = Store::open_in_memory();
    let now = 1_700_000_000;
    store
        .patients()
        .create(now, today(), sample_draft())
        .expect("create patient");

    let mut other = sample_draft();
    other.first_name = "Jane".to_string();
    other.last_name = "Smith".to_string();
    other.phone = "07987654321".to_string();
    other.emails = vec!["jane.smith@sky.co.uk".to_string()];
    store
        .patients()
        .create(now, today(), other)
        .expect("create patient");

    let by_name = store.patients().search("SMITH").expect("search");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].contact.last_name, "Smith");

    let by_email = store.patients().search("sky.co.uk").expect("search");
    assert_eq!(by_email.len(), 1);

    let by_category = store.patients().search("normal (18.5").expect("search");
    assert_eq!(by_category.len(), 2);

    let none = store.patients().search("nobody").expect("search");
    assert!(none.is_empty());

    let empty = store.patients().search("   ").expect("search");
    assert!(empty.is_empty());
}

#[test]
fn json_store_persists_across_reopen() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("patients.json");
    let now = 1_700_000_000;

    let id = {
        let store = Store::open(&path).expect("open store");
        let patient = store
            .patients()
            .create(now, today(), sample_draft())
            .expect("create patient");
        patient.id
    };

    let reopened = Store::open(&path).expect("reopen store");
    let patients = reopened.patients().list().expect("list");
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].id, id);
    assert_eq!(patients[0].contact.bmi, 24.7);
}

#[test]
fn missing_records_file_loads_as_empty() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("nested").join("patients.json");

    let store = Store::open(&path).expect("open store");
    let patients = store.patients().list().expect("list");
    assert!(patients.is_empty());
}
