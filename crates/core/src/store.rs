//! Durable key-value slots. The session component persists through this trait
//! so the same logic runs against a directory on disk, `localStorage` in the
//! browser, or plain memory in tests. Access is synchronous and local.

use crate::Error;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Synchronous key-value storage that survives a process restart.
pub trait DurableStore {
    /// Returns the raw value under `key`, or `None` when the slot is empty.
    ///
    /// # Errors
    /// Returns [`Error::StorageUnavailable`] when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Replaces the value under `key`.
    ///
    /// # Errors
    /// Returns [`Error::StorageUnavailable`] when the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns [`Error::StorageUnavailable`] when the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), Error>;
}

impl<T: DurableStore + ?Sized> DurableStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        (**self).remove(key)
    }
}

/// In-process store, used by tests and as a fallback when no durable backend exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-seeded with one slot.
    #[must_use]
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(key);
        Ok(())
    }
}
