//! # API Error Type
//!
//! The error normalizer: the single, total mapping from every failure kind
//! to an HTTP status code and a literal `{"detail": ...}` body.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Cantina                                │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<Json<T>, ApiError>                                              │
//! │         │                                                               │
//! │         ├── StoreError  ── Duplicate / NotFound ──────────┐            │
//! │         │                                                  │            │
//! │         ├── CoreError  ─── UnknownMenuItems / InvalidSort ─┤            │
//! │         │                                                  ▼            │
//! │         ├── ValidationError ── field descriptors ───── ApiError ───►    │
//! │         │                                                  ▲            │
//! │         └── JsonRejection ── malformed body ──────────────┘            │
//! │                                                                         │
//! │  IntoResponse emits the contract:                                       │
//! │    400 {"detail": "<entity> already exists"}          warn              │
//! │    404 {"detail": "<entity> not found"}               info              │
//! │    404 {"detail": "the following items do not        warn              │
//! │         exist in the menu: [ids]"}                                      │
//! │    422 {"detail": [{field, message}, ...]}            info              │
//! │    401 {"detail": "invalid credentials"}              warn              │
//! │    400 {"detail": "invalid sort key; ..."}            info              │
//! │    500 {"detail": "an unexpected error occurred;     error             │
//! │         try again later"}  ← internal detail logged, never leaked       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, info, warn};

use cantina_core::{CoreError, Entity, FieldError, ValidationError};
use cantina_store::StoreError;

/// API error returned from handlers.
///
/// One variant per row of the error contract. Handlers never build HTTP
/// responses for failures themselves; everything funnels through
/// `IntoResponse` below.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Key already taken in the target collection (400).
    #[error("{entity} already exists")]
    Duplicate { entity: Entity },

    /// No record under the requested key (404).
    #[error("{entity} not found")]
    NotFound { entity: Entity },

    /// Order references menu ids that do not exist (404).
    #[error("the following items do not exist in the menu: {missing:?}")]
    UnknownMenuItems { missing: Vec<u64> },

    /// Payload failed schema validation (422).
    #[error("payload failed validation on {} field(s)", errors.len())]
    Validation { errors: Vec<FieldError> },

    /// Missing, malformed, or mismatched credentials (401).
    ///
    /// Deliberately carries nothing: the response must not reveal which
    /// credential field was wrong.
    #[error("invalid credentials")]
    Unauthorized,

    /// Unrecognized sort key on the menu listing (400).
    #[error("invalid sort key; use 'name' or 'price'")]
    InvalidSortKey,

    /// Unexpected internal fault (500). The message is logged server-side
    /// and never sent to the caller.
    #[error("an unexpected error occurred; try again later")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Duplicate { .. } | ApiError::InvalidSortKey => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::UnknownMenuItems { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Severity tracks the failure tier: client mistakes are info/warn,
        // faults are errors with full detail kept server-side.
        match &self {
            ApiError::Duplicate { entity } => warn!(%entity, "duplicate key rejected"),
            ApiError::NotFound { entity } => info!(%entity, "record not found"),
            ApiError::UnknownMenuItems { missing } => {
                warn!(?missing, "order references unknown menu items")
            }
            ApiError::Validation { errors } => {
                info!(fields = errors.len(), "payload failed validation")
            }
            ApiError::Unauthorized => warn!("credentials rejected on destructive operation"),
            ApiError::InvalidSortKey => info!("listing requested with invalid sort key"),
            ApiError::Internal(detail) => error!(%detail, "unexpected internal fault"),
        }

        let detail = match &self {
            ApiError::Validation { errors } => json!(errors),
            other => json!(other.to_string()),
        };

        let mut response = (status, Json(json!({ "detail": detail }))).into_response();

        if matches!(self, ApiError::Unauthorized) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Basic"));
        }

        response
    }
}

// =============================================================================
// Conversions From Lower Layers
// =============================================================================

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { entity } => ApiError::Duplicate { entity },
            StoreError::NotFound { entity } => ApiError::NotFound { entity },
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownMenuItems { missing } => ApiError::UnknownMenuItems { missing },
            CoreError::InvalidSortKey { .. } => ApiError::InvalidSortKey,
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation { errors: err.errors }
    }
}

/// Bodies rejected by the serde layer (wrong types, missing required
/// fields, syntactically broken JSON) surface as the same 422 contract as
/// bound violations.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            errors: vec![FieldError::new("body", rejection.body_text())],
        }
    }
}

// =============================================================================
// Panic Boundary
// =============================================================================

/// Responder for `CatchPanicLayer`: the outermost boundary where uncaught
/// faults become the opaque 500 of the contract.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    ApiError::Internal(detail).into_response()
}

// =============================================================================
// Unit Tests
// =============================================================================
