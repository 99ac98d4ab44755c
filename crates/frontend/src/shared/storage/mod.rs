//! Persisted key-value store.
//!
//! `localStorage` is the only persistence layer of the app. Views never touch
//! it directly: they go through [`PersistedStore`], which swallows storage
//! failures and collapses undecodable records to their defaults.

mod local;
mod memory;
mod persisted;

pub use local::LocalStorage;
pub use memory::MemoryStore;
pub use persisted::{PersistedStore, STORE_SCHEMA_VERSION};
#[cfg(test)]
pub(crate) use persisted::testing;

use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// Synchronous string-keyed storage backend
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// `localStorage` when the browser grants it, otherwise an in-memory map
/// that lives as long as the tab.
pub fn browser_store() -> PersistedStore {
    if LocalStorage::is_available() {
        PersistedStore::new(Arc::new(LocalStorage))
    } else {
        log::warn!("localStorage unavailable, falling back to in-memory store");
        PersistedStore::new(Arc::new(MemoryStore::default()))
    }
}
