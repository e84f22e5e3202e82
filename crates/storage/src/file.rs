use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use plalz_core::errors::StorageError;
use plalz_core::store::{SnapshotStore, StoreSnapshot};

/// Single JSON document at a fixed path. `save` rewrites the whole record
/// through a sibling staging file and rename, so an interrupted write never
/// leaves a torn snapshot behind.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<StoreSnapshot>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(StorageError::Read(error)),
        };
        let snapshot = serde_json::from_str(&raw).map_err(StorageError::Decode)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StorageError::Write)?;
            }
        }

        let raw = serde_json::to_string_pretty(snapshot).map_err(StorageError::Encode)?;
        let staging = self.staging_path();
        fs::write(&staging, raw).map_err(StorageError::Write)?;
        fs::rename(&staging, &self.path).map_err(StorageError::Write)?;
        Ok(())
    }
}
