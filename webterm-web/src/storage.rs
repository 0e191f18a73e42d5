//! Settings persisted in `window.localStorage`

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use webterm_core::{Result, Settings, SettingsStore, TermError};

/// LocalStorage key holding the JSON settings
pub const SETTINGS_KEY: &str = "settings";

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }
}

fn storage_error(err: StorageError) -> TermError {
    match err {
        StorageError::SerdeError(e) => TermError::Json(e),
        other => TermError::Storage(other.to_string()),
    }
}

impl SettingsStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Settings>> {
        match LocalStorage::get::<Settings>(SETTINGS_KEY) {
            Ok(settings) => Ok(Some(settings)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(storage_error(e)),
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        LocalStorage::set(SETTINGS_KEY, settings).map_err(storage_error)
    }
}
