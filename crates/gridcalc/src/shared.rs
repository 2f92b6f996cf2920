//! Thread-safe handle to a cell store
//!
//! Every operation, reads included, takes the same lock: a formula read sees
//! one consistent snapshot of every cell it references.

use crate::error::Result;
use crate::store::CellStore;
use gridcalc_core::CellInput;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A [`CellStore`] shared between threads
///
/// Cloning the handle shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct SharedCellStore {
    inner: Arc<Mutex<CellStore>>,
}

impl SharedCellStore {
    /// Wrap an existing store
    pub fn new(store: CellStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`CellStore::set_cell_value`]
    pub fn set_cell_value<V: Into<CellInput>>(&self, id: &str, value: V) -> Result<()> {
        self.lock().set_cell_value(id, value)
    }

    /// See [`CellStore::set_cell_formula`]
    pub fn set_cell_formula(&self, id: &str, formula: &str) -> Result<()> {
        self.lock().set_cell_formula(id, formula)
    }

    /// See [`CellStore::get_cell_value`]
    pub fn get_cell_value(&self, id: &str) -> Result<i64> {
        self.lock().get_cell_value(id)
    }

    /// Run `f` with exclusive access to the store
    pub fn with_store<R>(&self, f: impl FnOnce(&mut CellStore) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, CellStore> {
        // Store operations leave the maps consistent even if a caller panicked
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<CellStore> for SharedCellStore {
    fn from(store: CellStore) -> Self {
        Self::new(store)
    }
}
