//! # cantina-core: Pure Business Logic for the Cantina Service
//!
//! This crate is the **heart** of the Cantina service. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cantina Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Layer (apps/api)                        │   │
//! │  │    axum routing ──► auth gate ──► handlers ──► error normalizer │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cantina-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation│  │  pricing  │  │   error   │  │   │
//! │  │   │ MenuItem  │  │   rules   │  │order_total│  │ CoreError │  │   │
//! │  │   │   Order   │  │  checks   │  │           │  │FieldError │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO NETWORK • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 cantina-store (Entity Store)                    │   │
//! │  │           In-memory keyed tables, one mutex per collection      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Order, patches, sort keys)
//! - [`validation`] - Create/update schema validation
//! - [`pricing`] - Order-total derivation against a menu lookup
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and store access are FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Derived State Flows One Way**: clients may send a `total`, the
//!    pricing engine always overwrites it

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cantina_core::MenuItem` instead of
// `use cantina_core::types::MenuItem`

pub use error::{CoreError, CoreResult, Entity, FieldError, ValidationError};
pub use types::*;
