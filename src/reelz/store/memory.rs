use super::KeyValueStore;
use crate::error::{ReelzError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory key-value store for testing.
///
/// Uses `RefCell` for interior mutability since reelz is single-threaded.
/// Clones share the same underlying map, so a test can keep a handle while the
/// controller owns another.
#[derive(Clone, Default)]
pub struct MemStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    simulate_write_error: Rc<Cell<bool>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value, e.g. corrupt JSON.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ReelzError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let store = MemStore::new();
        let handle = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap(), Some("v".to_string()));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn simulated_write_error_leaves_value_untouched() {
        let store = MemStore::with_value("k", "old");
        store.set_simulate_write_error(true);
        assert!(store.set("k", "new").is_err());
        assert_eq!(store.get("k").unwrap(), Some("old".to_string()));
        assert_eq!(store.write_count(), 0);
    }
}
