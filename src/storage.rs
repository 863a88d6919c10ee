//! `localStorage` backend for the preference store

use arcade_core::prefs::{KeyValueStore, PreferenceStore};
use arcade_core::StorageError;

/// The window's `localStorage`, or nothing when the browser refuses it
/// (storage disabled, sandboxed iframe). Every call then fails softly.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Preferences backed by this browser profile. Cheap; every read goes to
/// storage so there is nothing to keep around.
pub fn preferences() -> PreferenceStore<BrowserStorage> {
    PreferenceStore::new(BrowserStorage::local())
}
