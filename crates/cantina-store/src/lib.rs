//! # cantina-store: Entity Store for the Cantina Service
//!
//! Two independent in-memory keyed collections — menu items and orders —
//! behind repository types the HTTP layer can hold and tests can construct
//! in isolation.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         cantina-store                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │   MenuRepository     │        │   OrderRepository    │              │
//! │  │  ──────────────────  │        │  ──────────────────  │              │
//! │  │  create/get/update   │        │  create/get/delete   │              │
//! │  │  delete/list/clear   │        │  clear               │              │
//! │  └──────────┬───────────┘        └──────────┬───────────┘              │
//! │             │                               │                           │
//! │             ▼                               ▼                           │
//! │  ┌──────────────────────────────────────────────────────┐              │
//! │  │          KeyedTable<T>: Mutex<BTreeMap<u64, T>>      │              │
//! │  │          one lock per collection, never across await │              │
//! │  └──────────────────────────────────────────────────────┘              │
//! │                                                                         │
//! │  State is process-lifetime only: no persistence, by design.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation is immediately visible to subsequent reads; there is no
//! caching layer and no eventual consistency.

pub mod error;
pub mod menu;
pub mod orders;
pub mod table;

pub use error::{StoreError, StoreResult};
pub use menu::{MenuFilter, MenuRepository};
pub use orders::OrderRepository;
