//! # Error Types
//!
//! Domain-specific error types for cantina-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cantina-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule failures                         │
//! │  └── ValidationError  - Input validation failures (field descriptors)  │
//! │                                                                         │
//! │  cantina-store errors (separate crate)                                 │
//! │  └── StoreError       - Duplicate key / not found                      │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - What the HTTP caller sees (status + detail)    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Caller    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error values (entity, missing ids, field names)
//! 3. Errors are enum variants, never bare strings
//! 4. Each variant maps to exactly one entry in the API error contract

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Entity
// =============================================================================

/// Which of the two collections an error refers to.
///
/// The error contract spells the entity out in the response body
/// ("product already exists", "order not found"), so the Display impl is
/// part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A menu item (produto).
    Product,
    /// An order (pedido).
    Order,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Product => f.write_str("product"),
            Entity::Order => f.write_str("order"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Business rule failures.
///
/// These are distinct from [`ValidationError`]: validation rejects malformed
/// input before any business logic runs, while CoreError variants are raised
/// by the pricing engine and the listing parameters.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order references menu ids that do not exist.
    ///
    /// Carries EVERY missing id, in produtos order, duplicates preserved —
    /// the caller gets the complete picture in one response instead of
    /// fixing ids one at a time.
    #[error("the following items do not exist in the menu: {missing:?}")]
    UnknownMenuItems { missing: Vec<u64> },

    /// The menu listing was asked to sort by an unrecognized key.
    #[error("invalid sort key; use 'name' or 'price'")]
    InvalidSortKey { value: String },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field-level validation failure.
///
/// Serialized as-is into the 422 response body, so both field names are part
/// of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field (`nome`, `preco`, `id`, ...).
    pub field: String,

    /// Human-readable description of the violation.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error descriptor.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Input validation failure carrying one descriptor per offending field.
///
/// All violations in a payload are collected before failing, so a caller
/// sees every problem at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("payload failed validation on {} field(s)", errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates a validation error from collected field descriptors.
    pub fn new(errors: Vec<FieldError>) -> Self {
        ValidationError { errors }
    }

    /// Convenience constructor for a single-field failure.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_display() {
        assert_eq!(Entity::Product.to_string(), "product");
        assert_eq!(Entity::Order.to_string(), "order");
    }

    #[test]
    fn test_unknown_menu_items_message_preserves_order_and_duplicates() {
        let err = CoreError::UnknownMenuItems {
            missing: vec![7, 7, 999],
        };
        assert_eq!(
            err.to_string(),
            "the following items do not exist in the menu: [7, 7, 999]"
        );
    }

    #[test]
    fn test_invalid_sort_key_message() {
        let err = CoreError::InvalidSortKey {
            value: "brand".to_string(),
        };
        assert_eq!(err.to_string(), "invalid sort key; use 'name' or 'price'");
    }

    #[test]
    fn test_field_error_serializes_as_descriptor() {
        let err = FieldError::new("preco", "must be non-negative");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field": "preco", "message": "must be non-negative"})
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::single("nome", "is required");
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
