//! HTTP handlers

pub mod genres;
pub mod info;
pub mod movies;

use axum::http::StatusCode;

/// Catch-all for any method/path the router does not know.
pub async fn invalid_request() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "Invalid request")
}
