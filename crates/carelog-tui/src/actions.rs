use anyhow::Result;
use carelog_core::domain::PatientId;
use carelog_core::dto::{PatientDetailDto, PatientListItemDto};
use carelog_store::Store;
use chrono::Local;

use crate::app::{App, Mode};

#[derive(Debug, Clone)]
pub enum Action {
    LoadList,
    LoadDetail(PatientId),
    Delete(PatientId),
}

pub fn execute_action(app: &mut App, store: &Store, action: Action) -> Result<()> {
    match action {
        Action::LoadList => {
            let patients = if app.search_input.trim().is_empty() {
                store.patients().list()?
            } else {
                store.patients().search(&app.search_input)?
            };
            let today = Local::now().date_naive();
            let items: Vec<PatientListItemDto> = patients
                .iter()
                .map(|patient| PatientListItemDto::from_patient(patient, today))
                .collect();
            app.apply_list(items);
            app.clear_error();
        }
        Action::LoadDetail(patient_id) => {
            let today = Local::now().date_naive();
            match store.patients().get(patient_id)? {
                Some(patient) => {
                    let detail =
                        PatientDetailDto::from_patient(&patient, today, app.date_pattern);
                    app.apply_detail(detail);
                    app.clear_error();
                }
                None => {
                    app.detail = None;
                    app.set_error("patient not found");
                    if matches!(app.mode, Mode::Detail(id) if id == patient_id) {
                        app.mode = Mode::List;
                    }
                }
            }
        }
        Action::Delete(patient_id) => {
            let name = store
                .patients()
                .get(patient_id)?
                .map(|patient| patient.contact.full_name());
            store.patients().delete(patient_id)?;
            match name {
                Some(name) => app.set_status(format!("Deleted {}", name)),
                None => app.set_status("Deleted patient".to_string()),
            }
            if matches!(app.mode, Mode::Detail(id) if id == patient_id) {
                app.mode = Mode::List;
                app.detail = None;
            }
            app.enqueue(Action::LoadList);
        }
    }

    Ok(())
}
