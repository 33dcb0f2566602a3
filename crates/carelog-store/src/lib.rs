pub mod error;
pub mod json;
pub mod memory;
pub mod paths;
pub mod repo;

use std::path::Path;

use crate::error::Result;
use crate::json::JsonStore;
use crate::memory::MemoryStore;
use crate::repo::PatientsRepo;
use carelog_core::domain::Patient;

/// Full-read/full-overwrite persistence. Implementations hold the entire
/// record list as one unit; there is no partial update.
pub trait RecordStore {
    fn load(&self) -> Result<Vec<Patient>>;
    fn save(&self, patients: &[Patient]) -> Result<()>;
}

pub struct Store {
    backend: Box<dyn RecordStore>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            backend: Box::new(JsonStore::open(path)?),
        })
    }

    pub fn open_in_memory() -> Self {
        Self {
            backend: Box::new(MemoryStore::default()),
        }
    }

    pub fn patients(&self) -> PatientsRepo<'_> {
        PatientsRepo::new(self.backend.as_ref())
    }
}
