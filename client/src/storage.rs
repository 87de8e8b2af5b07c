use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use shoresquad_shared::joined::{JOINED_CLEANUPS_KEY, JoinedStore, StoreError};

/// Joined-cleanups record backed by `window.localStorage`.
pub(crate) struct BrowserStore;

impl BrowserStore {
    // gloo panics when localStorage is missing (privacy modes, sandboxed frames), so probe first.
    fn available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some()
    }
}

impl JoinedStore for BrowserStore {
    fn load(&self) -> Result<Option<Vec<String>>, StoreError> {
        if !Self::available() {
            return Err(StoreError::Unavailable("localStorage is not accessible".into()));
        }
        match LocalStorage::get::<Vec<String>>(JOINED_CLEANUPS_KEY) {
            Ok(titles) => Ok(Some(titles)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => {
                web_sys::console::warn_1(
                    &format!("Ignoring unreadable {JOINED_CLEANUPS_KEY} record: {e}").into(),
                );
                Ok(None)
            }
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }

    fn save(&self, titles: &[String]) -> Result<(), StoreError> {
        if !Self::available() {
            return Err(StoreError::Unavailable("localStorage is not accessible".into()));
        }
        LocalStorage::set(JOINED_CLEANUPS_KEY, titles).map_err(|e| StoreError::Write(e.to_string()))
    }
}
