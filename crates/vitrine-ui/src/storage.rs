//! Browser binding for session flags.

use gloo_storage::errors::StorageError;
use gloo_storage::{SessionStorage, Storage};
use vitrine_core::{Error, Result, SessionStore};

/// [`SessionStore`] backed by `window.sessionStorage`.
///
/// Values are stored as JSON, so the flag reads back as `true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        SessionStorage::set(key, value).map_err(|e| Error::Storage(e.to_string()))
    }

    fn get_flag(&self, key: &str) -> Result<Option<bool>> {
        match SessionStorage::get::<bool>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(Error::Storage(e.to_string())),
        }
    }
}
