//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Renders `templates/index.html`: a single `url` field with buttons to
/// shorten a long URL or follow a short one.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`, `GET /index`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}
