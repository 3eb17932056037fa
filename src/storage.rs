//! Persistent Storage
//!
//! The whole group collection lives under a single localStorage key as one
//! JSON document. The backend trait keeps the store testable off-browser.

use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key holding the serialized group collection
pub const STORAGE_KEY: &str = "equipments";

/// A single-slot string store
pub trait StorageBackend {
    fn read(&self) -> Option<String>;
    fn write(&self, payload: &str) -> Result<(), String>;
    fn remove(&self);
}

/// localStorage-backed persistence
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self) -> Option<String> {
        self.storage()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
    }

    fn write(&self, payload: &str) -> Result<(), String> {
        let storage = self
            .storage()
            .ok_or_else(|| "localStorage is unavailable".to_string())?;
        storage
            .set_item(STORAGE_KEY, payload)
            .map_err(|_| "writing to localStorage failed".to_string())
    }

    fn remove(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// In-memory backend; clones share the same slot
#[derive(Clone, Default)]
pub struct MemoryStorage {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn write(&self, payload: &str) -> Result<(), String> {
        *self.value.borrow_mut() = Some(payload.to_string());
        Ok(())
    }

    fn remove(&self) {
        *self.value.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_clones_share_the_slot() {
        let storage = MemoryStorage::new();
        let alias = storage.clone();

        storage.write("payload").unwrap();
        assert_eq!(alias.read().as_deref(), Some("payload"));

        alias.remove();
        assert_eq!(storage.read(), None);
    }
}
