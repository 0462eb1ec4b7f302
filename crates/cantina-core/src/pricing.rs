//! # Pricing Module
//!
//! Derives an order's total from the menu at creation time.
//!
//! ## Snapshot Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /pedido/1  {produtos: [1, 1, 3], total: 0.0}                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  order_total([1, 1, 3], menu lookup)  ← THIS MODULE                     │
//! │       │                                                                 │
//! │       ├── all resolve  → total = preco(1) + preco(1) + preco(3)        │
//! │       │                  client total DISCARDED, order stored           │
//! │       │                                                                 │
//! │       └── any missing  → UnknownMenuItems([every missing id])          │
//! │                          NOTHING stored, all-or-nothing                 │
//! │                                                                         │
//! │  The stored total is a snapshot: deleting item 3 from the menu later   │
//! │  neither changes nor invalidates the order.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The menu is injected as a pure lookup so this module stays free of any
//! store dependency; the caller resolves ids against whatever snapshot of
//! the menu it holds.

use crate::error::{CoreError, CoreResult};

/// Computes the total price of an order against the current menu.
///
/// Resolves every id in `produtos` through `price_of`. Duplicates contribute
/// once per occurrence. If any lookup fails, ALL missing ids are collected —
/// in sequence order, duplicates preserved — and the computation fails with
/// [`CoreError::UnknownMenuItems`]; a partially-summed total is never
/// returned.
///
/// ## Example
/// ```rust
/// use cantina_core::pricing::order_total;
///
/// let price_of = |id: u64| match id {
///     1 => Some(5.0),
///     2 => Some(3.5),
///     _ => None,
/// };
///
/// assert_eq!(order_total(&[1, 1, 2], price_of).unwrap(), 13.5);
/// assert!(order_total(&[1, 9], price_of).is_err());
/// ```
pub fn order_total(produtos: &[u64], price_of: impl Fn(u64) -> Option<f64>) -> CoreResult<f64> {
    let mut total = 0.0;
    let mut missing = Vec::new();

    for &id in produtos {
        match price_of(id) {
            Some(preco) => total += preco,
            None => missing.push(id),
        }
    }

    if missing.is_empty() {
        Ok(total)
    } else {
        Err(CoreError::UnknownMenuItems { missing })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
