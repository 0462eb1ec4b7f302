//! # Keyed Table
//!
//! The single primitive behind both repositories: a mutex-guarded
//! `BTreeMap<u64, T>`.
//!
//! ## Concurrency Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One mutex per collection.                                              │
//! │                                                                         │
//! │  • Every mutation (insert/update/remove) on a collection is atomic      │
//! │    with respect to other mutations on the same collection — no lost     │
//! │    updates, no duplicate-key races.                                     │
//! │  • The lock is never held across an .await; every operation is a       │
//! │    short synchronous critical section bounded by collection size.      │
//! │  • No cross-collection transactions exist or are needed: order         │
//! │    creation reads the menu table and writes the orders table.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use cantina_core::Entity;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// A mutex-guarded key→record mapping.
///
/// Rows are stored by caller-supplied `u64` keys; `BTreeMap` keeps
/// snapshots in ascending key order, which makes unsorted listings
/// deterministic.
#[derive(Debug)]
pub struct KeyedTable<T> {
    entity: Entity,
    rows: Mutex<BTreeMap<u64, T>>,
}

impl<T: Clone> KeyedTable<T> {
    /// Creates an empty table for the given entity kind.
    pub fn new(entity: Entity) -> Self {
        KeyedTable {
            entity,
            rows: Mutex::new(BTreeMap::new()),
        }
    }

    fn rows(&self) -> MutexGuard<'_, BTreeMap<u64, T>> {
        // A poisoning panic cannot leave a map operation half-applied, so
        // the data is still coherent; recover the guard instead of
        // cascading the panic into every later request.
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts a record under a new key, returning the stored copy.
    ///
    /// Fails with [`StoreError::Duplicate`] when the key is present.
    pub fn insert(&self, id: u64, row: T) -> StoreResult<T> {
        let mut rows = self.rows();
        if rows.contains_key(&id) {
            return Err(StoreError::Duplicate {
                entity: self.entity,
            });
        }
        rows.insert(id, row.clone());
        debug!(entity = %self.entity, id, "record inserted");
        Ok(row)
    }

    /// Returns a copy of the record under `id`.
    pub fn get(&self, id: u64) -> StoreResult<T> {
        self.rows().get(&id).cloned().ok_or(StoreError::NotFound {
            entity: self.entity,
        })
    }

    /// Mutates the record under `id` in place, returning the updated copy.
    pub fn update(&self, id: u64, apply: impl FnOnce(&mut T)) -> StoreResult<T> {
        let mut rows = self.rows();
        let row = rows.get_mut(&id).ok_or(StoreError::NotFound {
            entity: self.entity,
        })?;
        apply(row);
        debug!(entity = %self.entity, id, "record updated");
        Ok(row.clone())
    }

    /// Removes the record under `id`.
    pub fn remove(&self, id: u64) -> StoreResult<()> {
        let removed = self.rows().remove(&id);
        match removed {
            Some(_) => {
                debug!(entity = %self.entity, id, "record removed");
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: self.entity,
            }),
        }
    }

    /// Runs a closure against the map under the lock.
    ///
    /// This is how multi-row reads stay consistent: the order pricing path
    /// resolves every referenced id against one snapshot of the menu. The
    /// closure must not block.
    pub fn with<R>(&self, read: impl FnOnce(&BTreeMap<u64, T>) -> R) -> R {
        read(&self.rows())
    }

    /// Copies all rows out, in ascending key order.
    pub fn snapshot(&self) -> Vec<T> {
        self.rows().values().cloned().collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Removes every record. Used by tests for explicit isolation.
    pub fn clear(&self) {
        self.rows().clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> KeyedTable<&'static str> {
        KeyedTable::new(Entity::Product)
    }

    #[test]
    fn test_insert_then_get_returns_stored_row() {
        let t = table();
        t.insert(1, "café").unwrap();
        assert_eq!(t.get(1).unwrap(), "café");
    }

    #[test]
    fn test_insert_duplicate_key_fails_and_keeps_original() {
        let t = table();
        t.insert(1, "café").unwrap();

        let err = t.insert(1, "chá").unwrap_err();
        assert_eq!(
            err,
            StoreError::Duplicate {
                entity: Entity::Product
            }
        );
        assert_eq!(t.get(1).unwrap(), "café");
    }

    #[test]
    fn test_get_missing_key() {
        let err = table().get(999).unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                entity: Entity::Product
            }
        );
    }

    #[test]
    fn test_update_mutates_in_place() {
        let t = table();
        t.insert(1, "café").unwrap();

        let updated = t.update(1, |row| *row = "café com leite").unwrap();
        assert_eq!(updated, "café com leite");
        assert_eq!(t.get(1).unwrap(), "café com leite");

        assert!(t.update(2, |_| {}).is_err());
    }

    #[test]
    fn test_remove() {
        let t = table();
        t.insert(1, "café").unwrap();

        t.remove(1).unwrap();
        assert!(t.get(1).is_err());
        assert!(t.remove(1).is_err());
    }

    #[test]
    fn test_snapshot_is_key_ordered() {
        let t = table();
        t.insert(3, "c").unwrap();
        t.insert(1, "a").unwrap();
        t.insert(2, "b").unwrap();

        assert_eq!(t.snapshot(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clear() {
        let t = table();
        t.insert(1, "café").unwrap();
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }
}
