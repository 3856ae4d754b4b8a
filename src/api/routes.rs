//! API route configuration.

use crate::api::handlers::{create_url_handler, resolve_url_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /urls` - Shorten a long URL (idempotent per long URL)
/// - `GET  /urls` - Resolve a short code
pub fn routes() -> Router<AppState> {
    Router::new().route("/urls", get(resolve_url_handler).post(create_url_handler))
}
