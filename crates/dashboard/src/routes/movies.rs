//! Movies panel.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use marquee_core::Movie;

use super::users::LoadErrorTemplate;
use crate::state::AppState;

/// Movies panel fragment; each row carries a booking button.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/movies.html")]
pub struct MoviesTemplate {
    pub movies: Vec<Movie>,
}

/// Movies panel (HTMX).
#[instrument(skip(state))]
pub async fn list_fragment(State(state): State<AppState>) -> impl IntoResponse {
    match state.cache().refresh_movies(state.client()).await {
        Ok(movies) => MoviesTemplate { movies }.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load movies");
            LoadErrorTemplate {
                message: "영화 데이터 로딩 실패".to_owned(),
            }
            .into_response()
        }
    }
}
