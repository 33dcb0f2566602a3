use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::RecordStore;
use carelog_core::domain::Patient;

/// File-backed store. The whole record list lives in one JSON document; a
/// missing file reads as an empty list.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        restrict_file_permissions(path)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl RecordStore for JsonStore {
    fn load(&self) -> Result<Vec<Patient>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, patients: &[Patient]) -> Result<()> {
        let contents = serde_json::to_string_pretty(patients)?;
        fs::write(&self.path, contents)?;
        restrict_file_permissions(&self.path)
    }
}

#[cfg(unix)]
fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if path.exists() {
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
