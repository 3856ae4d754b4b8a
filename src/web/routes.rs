//! Web form route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, submit_handler, submit_page_handler};
use axum::{Router, routing::get};

/// Public web routes.
///
/// # Endpoints
///
/// - `GET  /`, `GET /index` - Landing page with the form
/// - `GET  /submit`         - Empty submission page
/// - `POST /submit`         - Shorten or follow a URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/index", get(index_handler))
        .route("/submit", get(submit_page_handler).post(submit_handler))
}
