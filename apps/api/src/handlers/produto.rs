//! Menu item (produto) handlers.
//!
//! Control flow per request: auth gate (DELETE only) → validation → store
//! mutation/read. Failures convert into [`ApiError`] and leave through the
//! normalizer; success responses echo the stored record.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use cantina_core::types::SortKey;
use cantina_core::{validation, MenuItem, MenuItemPatch};
use cantina_store::MenuFilter;

use crate::auth::require_basic;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /produto/{id} — create a menu item under a caller-supplied id.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: Result<Json<MenuItem>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let Json(item) = payload?;
    validation::validate_path_id(id)?;
    validation::validate_menu_item(&item)?;

    let stored = state.menu.create(id, item)?;
    info!(id, nome = %stored.nome, "product created");
    Ok(Json(stored))
}

/// GET /produto/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<MenuItem>, ApiError> {
    validation::validate_path_id(id)?;
    Ok(Json(state.menu.get(id)?))
}

/// PATCH /produto/{id} — merge non-null fields into the stored item.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: Result<Json<MenuItemPatch>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let Json(patch) = payload?;
    validation::validate_path_id(id)?;
    validation::validate_menu_item_patch(&patch)?;

    let merged = state.menu.update(id, &patch)?;
    info!(id, "product updated");
    Ok(Json(merged))
}

/// DELETE /produto/{id} — requires Basic auth.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    // Path validation precedes the auth gate: id 0 is malformed on every
    // route, authenticated or not
    validation::validate_path_id(id)?;
    require_basic(&headers, &state.credentials)?;

    state.menu.delete(id)?;
    info!(id, "product removed");
    Ok(Json(json!({ "Sucesso": "Produto removido!" })))
}

/// Query parameters for the menu listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "sortKey")]
    pub sort_key: Option<String>,
}

/// GET /produtos/ — list, optionally filtered and sorted.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    // Parse before touching the store: an invalid sort key must fail the
    // request, never degrade into an unsorted listing
    let sort = query.sort_key.as_deref().map(SortKey::parse).transpose()?;

    let filter = MenuFilter {
        name: query.name,
        brand: query.brand,
    };

    Ok(Json(state.menu.list(&filter, sort)))
}
