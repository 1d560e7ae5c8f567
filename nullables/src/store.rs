//! Nullable store: thread-safe in-memory key-value storage.

use baselingo_store::{KeyValueStore, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// An in-memory stand-in for local storage.
///
/// Can be told to behave as if storage were disabled, in which case every
/// call fails with [`StoreError::Unavailable`]. Writes can also be failed on
/// their own, leaving reads intact, to model a full quota.
pub struct NullKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    unavailable: AtomicBool,
    write_fault: Mutex<Option<StoreError>>,
}

impl NullKeyValueStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
            write_fault: Mutex::new(None),
        }
    }

    /// Seed a raw value, e.g. data written by another client.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Fail every `set` and `remove` with `fault` until cleared with `None`.
    pub fn fail_writes_with(&self, fault: Option<StoreError>) {
        *self.write_fault.lock().unwrap() = fault;
    }

    /// The raw stored value, bypassing the failure switch.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("storage disabled".to_string()));
        }
        Ok(())
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        self.check_available()?;
        match self.write_fault.lock().unwrap().clone() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }
}

impl Default for NullKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for NullKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
