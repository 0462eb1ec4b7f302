//! Order (pedido) handlers.
//!
//! Order creation is the one place two collections meet: referenced ids are
//! resolved against a single snapshot of the menu, the derived total
//! overwrites whatever the client sent, and the order is stored
//! all-or-nothing.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use cantina_core::{pricing, validation, Order, OrderDraft};

use crate::auth::require_basic;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /pedido/{id} — create an order, deriving its total from the menu.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: Result<Json<OrderDraft>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(draft) = payload?;
    validation::validate_path_id(id)?;
    validation::validate_order_draft(&draft)?;

    // One lock acquisition on the menu: every id resolves against the same
    // snapshot. The client-supplied total is discarded here.
    let total = state
        .menu
        .with_prices(|price_of| pricing::order_total(&draft.produtos, price_of))?;

    let stored = state.orders.create(
        id,
        Order {
            produtos: draft.produtos,
            total,
        },
    )?;

    info!(id, total = stored.total, items = stored.produtos.len(), "order created");
    Ok(Json(stored))
}

/// GET /pedido/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Order>, ApiError> {
    validation::validate_path_id(id)?;
    Ok(Json(state.orders.get(id)?))
}

/// DELETE /pedido/{id} — requires Basic auth.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    // Same precedence as the produto route: malformed id before auth
    validation::validate_path_id(id)?;
    require_basic(&headers, &state.credentials)?;

    state.orders.delete(id)?;
    info!(id, "order removed");
    Ok(Json(json!({ "Sucesso": "Pedido removido!" })))
}
