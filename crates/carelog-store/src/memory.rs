use std::cell::RefCell;

use crate::error::Result;
use crate::RecordStore;
use carelog_core::domain::Patient;

/// In-memory store with the same full-read/full-overwrite contract as the
/// file backend. Used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Patient>>,
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<Patient>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, patients: &[Patient]) -> Result<()> {
        *self.records.borrow_mut() = patients.to_vec();
        Ok(())
    }
}
