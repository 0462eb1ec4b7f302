//! # Store Error Types
//!
//! Error types for entity store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Table operation (insert/get/update/delete)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Which collection, which failure            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in apps/api) ← Status code + literal "detail" body          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cantina_core::Entity;
use thiserror::Error;

/// Entity store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The key is already taken in the collection.
    ///
    /// Keys are caller-supplied, so this is a client error, never a
    /// generation collision.
    #[error("{entity} already exists")]
    Duplicate { entity: Entity },

    /// No record stored under the requested key.
    #[error("{entity} not found")]
    NotFound { entity: Entity },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_entity() {
        let err = StoreError::Duplicate {
            entity: Entity::Product,
        };
        assert_eq!(err.to_string(), "product already exists");

        let err = StoreError::NotFound {
            entity: Entity::Order,
        };
        assert_eq!(err.to_string(), "order not found");
    }
}
