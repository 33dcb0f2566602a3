pub mod birth_date;
pub mod email;
pub mod ids;
pub mod measurements;
pub mod name;
pub mod patient;
pub mod phone;

pub use birth_date::{parse_birth_date, validate_birth_date};
pub use email::{validate_email, validate_emails};
pub use ids::PatientId;
pub use measurements::{parse_measurement, validate_height, validate_weight};
pub use name::{validate_first_name, validate_last_name};
pub use patient::{Patient, PatientDraft, ValidatedPatient};
pub use phone::validate_phone;
