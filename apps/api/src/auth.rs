//! # Auth Gate
//!
//! Stateless Basic-auth check guarding destructive operations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DELETE /produto/1                                                      │
//! │  Authorization: Basic YWRtaW46NDMyMQ==                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  require_basic(headers, expected)  ← THIS MODULE                        │
//! │       │                                                                 │
//! │       ├── header absent/malformed ──► Unauthorized                      │
//! │       ├── user or password differs ─► Unauthorized (which one is       │
//! │       │                               never revealed)                   │
//! │       └── exact match on both ─────► proceed to the handler            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Applied only to DELETE on both collections; every other operation is
//! unauthenticated. No sessions, no tokens, no attempt limiting.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::Credentials;
use crate::error::ApiError;

/// Checks the `Authorization: Basic` header against the expected pair.
///
/// Comparison is exact, case-sensitive string equality on both fields. All
/// failure shapes collapse into the same [`ApiError::Unauthorized`].
pub fn require_basic(headers: &HeaderMap, expected: &Credentials) -> Result<(), ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let encoded = header
        .strip_prefix("Basic ")
        .ok_or(ApiError::Unauthorized)?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| ApiError::Unauthorized)?;
    let decoded = String::from_utf8(decoded).map_err(|_| ApiError::Unauthorized)?;

    // Password may legally contain ':'; only the first one separates
    let (username, password) = decoded.split_once(':').ok_or(ApiError::Unauthorized)?;

    if username == expected.username && password == expected.password {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
