pub mod patients;

pub use patients::{PatientUpdate, PatientsRepo};
