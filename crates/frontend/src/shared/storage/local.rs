use web_sys::window;

use super::{KvStore, StoreError};

/// Browser `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Result<web_sys::Storage, StoreError> {
    window()
        .ok_or(StoreError::Unavailable)?
        .local_storage()
        .map_err(|_| StoreError::Unavailable)?
        .ok_or(StoreError::Unavailable)
}

impl LocalStorage {
    pub fn is_available() -> bool {
        get_local_storage().is_ok()
    }
}

impl KvStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // QuotaExceededError surfaces here
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }
}
