//! # Cantina API
//!
//! HTTP application for the Cantina service: two in-memory collections
//! (menu items, orders) behind eight routes, a Basic-auth gate on
//! deletions, and a centralized error normalizer.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  inbound request                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  auth gate (DELETE only) ──► validation ──► pricing (orders only)      │
//! │       │                                          │                      │
//! │       ▼                                          ▼                      │
//! │  store mutation / read ◄─────────────────────────┘                     │
//! │       │                                                                 │
//! │       ├── success: echo the stored record                              │
//! │       └── failure: ApiError → status + {"detail": ...}                 │
//! │                                                                         │
//! │  CatchPanicLayer wraps everything: uncaught faults become the          │
//! │  opaque 500 of the contract.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::ApiConfig;
pub use state::AppState;

/// Assembles the full application router.
///
/// Kept separate from `main` so integration tests can drive the exact
/// production routing with an isolated [`AppState`].
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/produto/{id}",
            post(handlers::produto::create)
                .get(handlers::produto::get)
                .patch(handlers::produto::update)
                .delete(handlers::produto::remove),
        )
        // Both spellings serve the listing
        .route("/produtos", get(handlers::produto::list))
        .route("/produtos/", get(handlers::produto::list))
        .route(
            "/pedido/{id}",
            post(handlers::pedido::create)
                .get(handlers::pedido::get)
                .delete(handlers::pedido::remove),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .with_state(state)
}
