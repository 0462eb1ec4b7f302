//! # Order Repository
//!
//! Store operations for orders (pedidos).
//!
//! Orders are created with a total already derived by the pricing engine;
//! this repository never recomputes or revalidates it. There is no update
//! operation: an order is created once and either read or deleted.

use cantina_core::{Entity, Order};

use crate::error::StoreResult;
use crate::table::KeyedTable;

/// Repository for order store operations.
#[derive(Debug)]
pub struct OrderRepository {
    table: KeyedTable<Order>,
}

impl Default for OrderRepository {
    fn default() -> Self {
        OrderRepository::new()
    }
}

impl OrderRepository {
    /// Creates an empty order collection.
    pub fn new() -> Self {
        OrderRepository {
            table: KeyedTable::new(Entity::Order),
        }
    }

    /// Stores a new order under a caller-supplied id.
    pub fn create(&self, id: u64, order: Order) -> StoreResult<Order> {
        self.table.insert(id, order)
    }

    /// Fetches an order by id.
    pub fn get(&self, id: u64) -> StoreResult<Order> {
        self.table.get(id)
    }

    /// Deletes an order by id.
    pub fn delete(&self, id: u64) -> StoreResult<()> {
        self.table.remove(id)
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when no orders are stored.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Removes every order. Test isolation only.
    pub fn clear(&self) {
        self.table.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
