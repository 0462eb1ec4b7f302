//! # Validation Module
//!
//! Schema validation for incoming payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: serde (deserialization)                                      │
//! │  ├── Wrong JSON types, missing required fields                         │
//! │  └── Surfaced by the HTTP layer as the same 422 contract               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (value bounds)                                   │
//! │  ├── nome non-empty, preco/total ≥ 0 and finite, path id > 0           │
//! │  └── Collects ALL violations into field descriptors                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Business rules (store + pricing)                             │
//! │  ├── Duplicate keys, missing records                                   │
//! │  └── Unresolvable menu references                                      │
//! │                                                                         │
//! │  A payload only reaches layer 3 once layers 1-2 pass                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two schema modes per entity: create (all declared fields required and
//! bound-checked) and update (every field optional, supplied fields
//! bound-checked). Business-rule failures are NOT raised here.

use crate::error::{FieldError, ValidationError};
use crate::types::{MenuItem, MenuItemPatch, OrderDraft};

/// Result type for validation operations.
pub type ValidationResult = Result<(), ValidationError>;

// =============================================================================
// Path Parameters
// =============================================================================

/// Validates a caller-supplied entity id from the request path.
///
/// ## Rules
/// - Must be positive (> 0); ids are never generated by the service
pub fn validate_path_id(id: u64) -> ValidationResult {
    if id == 0 {
        return Err(ValidationError::single("id", "must be greater than zero"));
    }
    Ok(())
}

// =============================================================================
// Menu Items
// =============================================================================

/// Validates a menu item create payload.
///
/// ## Rules
/// - `nome` must be non-empty after trimming
/// - `preco` must be non-negative and finite (no NaN/inf through JSON
///   round-trips)
/// - `marca` is free-form and optional
pub fn validate_menu_item(item: &MenuItem) -> ValidationResult {
    let mut errors = Vec::new();
    check_nome(&item.nome, &mut errors);
    check_price("preco", item.preco, &mut errors);
    finish(errors)
}

/// Validates a menu item partial update.
///
/// Only supplied fields are checked; absent fields have nothing to violate.
pub fn validate_menu_item_patch(patch: &MenuItemPatch) -> ValidationResult {
    let mut errors = Vec::new();
    if let Some(nome) = &patch.nome {
        check_nome(nome, &mut errors);
    }
    if let Some(preco) = patch.preco {
        check_price("preco", preco, &mut errors);
    }
    finish(errors)
}

// =============================================================================
// Orders
// =============================================================================

/// Validates an order create payload.
///
/// ## Rules
/// - `total` must be non-negative and finite, even though the pricing
///   engine overwrites it (bounds are part of the create schema)
/// - `produtos` ids are unsigned by construction; whether they resolve is a
///   business rule, checked by the pricing engine, not here
pub fn validate_order_draft(draft: &OrderDraft) -> ValidationResult {
    let mut errors = Vec::new();
    check_price("total", draft.total, &mut errors);
    finish(errors)
}

// =============================================================================
// Shared Checks
// =============================================================================

fn check_nome(nome: &str, errors: &mut Vec<FieldError>) {
    if nome.trim().is_empty() {
        errors.push(FieldError::new("nome", "must not be empty"));
    }
}

fn check_price(field: &str, value: f64, errors: &mut Vec<FieldError>) {
    if !value.is_finite() {
        errors.push(FieldError::new(field, "must be a finite number"));
    } else if value < 0.0 {
        errors.push(FieldError::new(field, "must be non-negative"));
    }
}

fn finish(errors: Vec<FieldError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(nome: &str, preco: f64) -> MenuItem {
        MenuItem {
            nome: nome.to_string(),
            preco,
            marca: None,
        }
    }

    #[test]
    fn test_validate_path_id() {
        assert!(validate_path_id(1).is_ok());
        assert!(validate_path_id(u64::MAX).is_ok());

        let err = validate_path_id(0).unwrap_err();
        assert_eq!(err.errors[0].field, "id");
    }

    #[test]
    fn test_validate_menu_item() {
        assert!(validate_menu_item(&item("Café", 5.0)).is_ok());
        assert!(validate_menu_item(&item("Água", 0.0)).is_ok());

        // Names have no length cap; only emptiness is invalid
        assert!(validate_menu_item(&item(&"A".repeat(300), 5.0)).is_ok());

        assert!(validate_menu_item(&item("", 5.0)).is_err());
        assert!(validate_menu_item(&item("   ", 5.0)).is_err());
        assert!(validate_menu_item(&item("Café", -0.5)).is_err());
        assert!(validate_menu_item(&item("Café", f64::NAN)).is_err());
        assert!(validate_menu_item(&item("Café", f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validate_menu_item_collects_every_violation() {
        let err = validate_menu_item(&item("", -1.0)).unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["nome", "preco"]);
    }

    #[test]
    fn test_validate_patch_checks_only_supplied_fields() {
        assert!(validate_menu_item_patch(&MenuItemPatch::default()).is_ok());

        let ok = MenuItemPatch {
            preco: Some(6.0),
            ..Default::default()
        };
        assert!(validate_menu_item_patch(&ok).is_ok());

        let bad_price = MenuItemPatch {
            preco: Some(-6.0),
            ..Default::default()
        };
        assert!(validate_menu_item_patch(&bad_price).is_err());

        let bad_name = MenuItemPatch {
            nome: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(validate_menu_item_patch(&bad_name).is_err());
    }

    #[test]
    fn test_validate_order_draft() {
        let ok = OrderDraft {
            produtos: vec![1, 1, 2],
            total: 0.0,
        };
        assert!(validate_order_draft(&ok).is_ok());

        let negative_total = OrderDraft {
            produtos: vec![1],
            total: -1.0,
        };
        let err = validate_order_draft(&negative_total).unwrap_err();
        assert_eq!(err.errors[0].field, "total");
    }
}
