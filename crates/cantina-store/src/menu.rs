//! # Menu Repository
//!
//! Store operations for menu items (produtos).
//!
//! ## Listing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /produtos/?name=café&brand=cafeteria x&sortKey=price               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list(filter, sort)                                                     │
//! │       │                                                                 │
//! │       ├── filter: case-insensitive EXACT match on nome and/or marca    │
//! │       │           (both present = both must match)                     │
//! │       │                                                                 │
//! │       └── sort: ascending by SortKey; no sort key = key order          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cantina_core::{Entity, MenuItem, MenuItemPatch, SortKey};

use crate::error::StoreResult;
use crate::table::KeyedTable;

/// Case-insensitive exact-match filters for the menu listing.
///
/// `None` fields match everything; present fields compose with AND.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub name: Option<String>,
    pub brand: Option<String>,
}

impl MenuFilter {
    fn matches(&self, item: &MenuItem) -> bool {
        if let Some(name) = &self.name {
            if !eq_ignore_case(name, &item.nome) {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            match &item.marca {
                Some(marca) if eq_ignore_case(brand, marca) => {}
                // A brand filter never matches an item without a brand
                _ => return false,
            }
        }
        true
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    // to_lowercase rather than eq_ignore_ascii_case: menu names carry
    // accented characters ("Café")
    a.to_lowercase() == b.to_lowercase()
}

/// Repository for menu item store operations.
#[derive(Debug)]
pub struct MenuRepository {
    table: KeyedTable<MenuItem>,
}

impl Default for MenuRepository {
    fn default() -> Self {
        MenuRepository::new()
    }
}

impl MenuRepository {
    /// Creates an empty menu.
    pub fn new() -> Self {
        MenuRepository {
            table: KeyedTable::new(Entity::Product),
        }
    }

    /// Stores a new menu item under a caller-supplied id.
    pub fn create(&self, id: u64, item: MenuItem) -> StoreResult<MenuItem> {
        self.table.insert(id, item)
    }

    /// Fetches a menu item by id.
    pub fn get(&self, id: u64) -> StoreResult<MenuItem> {
        self.table.get(id)
    }

    /// Merges a partial update into the stored item, returning the result.
    pub fn update(&self, id: u64, patch: &MenuItemPatch) -> StoreResult<MenuItem> {
        self.table.update(id, |item| patch.apply_to(item))
    }

    /// Deletes a menu item by id.
    ///
    /// Orders referencing it keep their stored totals: totals are snapshots.
    pub fn delete(&self, id: u64) -> StoreResult<()> {
        self.table.remove(id)
    }

    /// Lists menu items, optionally filtered and sorted.
    ///
    /// Without a sort key the listing comes back in ascending id order;
    /// sorting is ascending and stable.
    pub fn list(&self, filter: &MenuFilter, sort: Option<SortKey>) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self
            .table
            .with(|rows| rows.values().filter(|i| filter.matches(i)).cloned().collect());

        match sort {
            Some(SortKey::Name) => items.sort_by(|a, b| a.nome.cmp(&b.nome)),
            // total_cmp: prices are validated finite, but NaN must not panic a listing
            Some(SortKey::Price) => items.sort_by(|a, b| a.preco.total_cmp(&b.preco)),
            None => {}
        }

        items
    }

    /// Resolves ids against one consistent snapshot of the menu.
    ///
    /// The pricing engine runs inside the closure so every referenced id is
    /// looked up under a single lock acquisition.
    pub fn with_prices<R>(&self, read: impl FnOnce(&dyn Fn(u64) -> Option<f64>) -> R) -> R {
        self.table
            .with(|rows| read(&|id| rows.get(&id).map(|item| item.preco)))
    }

    /// Removes every menu item. Test isolation only.
    pub fn clear(&self) {
        self.table.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
