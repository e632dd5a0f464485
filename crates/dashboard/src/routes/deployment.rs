//! Deployment status panel.
//!
//! Purely informational: rows are shown verbatim and nothing here feeds the
//! booking flows, so the panel reads straight from the API without going
//! through the view cache.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use marquee_core::DeploymentInfo;

use super::users::LoadErrorTemplate;
use crate::state::AppState;
use crate::view::{self, DeploymentSummary};

/// Deployment panel fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/deployment.html")]
pub struct DeploymentTemplate {
    pub services: Vec<DeploymentInfo>,
    pub summary: DeploymentSummary,
}

/// Deployment status panel (HTMX).
#[instrument(skip(state))]
pub async fn status_fragment(State(state): State<AppState>) -> impl IntoResponse {
    match state.client().deployment_status().await {
        Ok(services) => {
            let summary = view::deployment_summary(&services);
            DeploymentTemplate { services, summary }.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load deployment status");
            LoadErrorTemplate {
                message: "배포 상태 데이터 로딩 실패".to_owned(),
            }
            .into_response()
        }
    }
}
