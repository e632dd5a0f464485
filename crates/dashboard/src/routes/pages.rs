//! Dashboard shell page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// The dashboard shell; every panel loads itself via HTMX afterwards.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Render the dashboard shell.
pub async fn index() -> impl IntoResponse {
    IndexTemplate
}
