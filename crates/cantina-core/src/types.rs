//! # Domain Types
//!
//! Wire and domain types for the Cantina service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │  MenuItemPatch  │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  nome           │   │  nome?          │   │  produtos       │       │
//! │  │  preco          │   │  preco?         │   │  total (derived)│       │
//! │  │  marca?         │   │  marca?         │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   OrderDraft    │   │    SortKey      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  produtos       │   │  Name ("name")  │                             │
//! │  │  total (ignored)│   │  Price ("price")│                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Both collections are keyed by a caller-supplied `u64 > 0` taken from the
//! request path. The key never appears inside the record body and is
//! immutable once created.
//!
//! Field names are Portuguese because they ARE the wire contract
//! (`nome`/`preco`/`marca`/`produtos`/`total`); renaming them in Rust would
//! just add a serde-rename layer of indirection.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable menu item (cardápio entry).
///
/// Doubles as the create payload: every field is required on the wire except
/// `marca`, which is declared optional by the data model. Responses echo the
/// stored record exactly, `marca: null` included. Unknown fields are
/// rejected at deserialization, so a typo'd field name fails loudly instead
/// of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuItem {
    /// Display name. Non-empty after trimming.
    pub nome: String,

    /// Unit price. Non-negative and finite.
    pub preco: f64,

    /// Optional brand.
    pub marca: Option<String>,
}

// =============================================================================
// Menu Item Patch
// =============================================================================

/// Partial update for a [`MenuItem`].
///
/// Every field is optional; a field explicitly present and non-null
/// overwrites the stored value, while absent or null fields leave it
/// untouched. The merge is this one function — there is no dynamic
/// dict-style merging anywhere else. Unknown fields are rejected: a patch
/// that only carries a misspelled field must not succeed as a no-op.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuItemPatch {
    pub nome: Option<String>,
    pub preco: Option<f64>,
    pub marca: Option<String>,
}

impl MenuItemPatch {
    /// Applies the supplied fields onto an existing item.
    pub fn apply_to(&self, item: &mut MenuItem) {
        if let Some(nome) = &self.nome {
            item.nome = nome.clone();
        }
        if let Some(preco) = self.preco {
            item.preco = preco;
        }
        if let Some(marca) = &self.marca {
            item.marca = Some(marca.clone());
        }
    }

    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.nome.is_none() && self.preco.is_none() && self.marca.is_none()
    }
}

// =============================================================================
// Order
// =============================================================================

/// A stored order (pedido).
///
/// `total` is derived by the pricing engine at creation time and frozen:
/// later menu changes or deletions never touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Referenced menu item ids, order preserved, duplicates allowed.
    pub produtos: Vec<u64>,

    /// Sum of referenced item prices at creation time. Never client-set.
    pub total: f64,
}

/// The order create payload.
///
/// Clients send `total` for wire compatibility, but the pricing engine
/// overwrites it unconditionally; it defaults to 0.0 when omitted. Unknown
/// fields are rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderDraft {
    pub produtos: Vec<u64>,

    #[serde(default)]
    pub total: f64,
}

// =============================================================================
// Sort Key
// =============================================================================

/// Recognized sort keys for the menu listing.
///
/// Query values are English (`name`, `price`) even though the sorted fields
/// are `nome`/`preco` — the listing API predates the field naming and the
/// contract keeps it that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by `nome`.
    Name,
    /// Ascending by `preco`.
    Price,
}

impl SortKey {
    /// Parses a query-string value into a sort key.
    ///
    /// Anything other than the two literal values is rejected — an unknown
    /// key must never degrade into a silently-unsorted listing.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            other => Err(CoreError::InvalidSortKey {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> MenuItem {
        MenuItem {
            nome: "Café".to_string(),
            preco: 5.0,
            marca: Some("Cafeteria X".to_string()),
        }
    }

    #[test]
    fn test_patch_overwrites_only_supplied_fields() {
        let mut item = coffee();
        let patch = MenuItemPatch {
            preco: Some(6.0),
            ..Default::default()
        };

        patch.apply_to(&mut item);

        assert_eq!(item.nome, "Café");
        assert_eq!(item.preco, 6.0);
        assert_eq!(item.marca.as_deref(), Some("Cafeteria X"));
    }

    #[test]
    fn test_patch_null_fields_leave_stored_values() {
        // Explicit nulls deserialize to None, same as absent fields
        let patch: MenuItemPatch =
            serde_json::from_str(r#"{"nome": null, "preco": null, "marca": null}"#).unwrap();
        assert!(patch.is_empty());

        let mut item = coffee();
        patch.apply_to(&mut item);
        assert_eq!(item, coffee());
    }

    #[test]
    fn test_payloads_reject_unknown_fields() {
        // A misspelled field must fail deserialization, never silently no-op
        assert!(serde_json::from_str::<MenuItemPatch>(r#"{"precco": 6.0}"#).is_err());
        assert!(serde_json::from_str::<MenuItem>(
            r#"{"nome": "Café", "preco": 5.0, "categoria": "bebida"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<OrderDraft>(r#"{"produtos": [1], "totall": 5.0}"#).is_err());
    }

    #[test]
    fn test_order_draft_total_defaults_to_zero() {
        let draft: OrderDraft = serde_json::from_str(r#"{"produtos": [1, 2]}"#).unwrap();
        assert_eq!(draft.produtos, vec![1, 2]);
        assert_eq!(draft.total, 0.0);
    }

    #[test]
    fn test_menu_item_serializes_null_marca() {
        let item = MenuItem {
            nome: "Suco".to_string(),
            preco: 3.5,
            marca: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"nome": "Suco", "preco": 3.5, "marca": null})
        );
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("name").unwrap(), SortKey::Name);
        assert_eq!(SortKey::parse("price").unwrap(), SortKey::Price);
        assert!(SortKey::parse("preco").is_err());
        assert!(SortKey::parse("NAME").is_err());
        assert!(SortKey::parse("").is_err());
    }
}
