//! Users panel and user creation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use marquee_core::{NewUser, User};

use crate::state::AppState;

/// Users panel fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/users.html")]
pub struct UsersTemplate {
    pub users: Vec<User>,
}

/// Load-failure fragment shared by the panels.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/load_error.html")]
pub struct LoadErrorTemplate {
    pub message: String,
}

/// Confirmation fragment showing the server-assigned id.
///
/// The id is echoed back deliberately: later booking flows need it and no
/// session is retained, so the user has to note it down.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/user_created.html")]
pub struct UserCreatedTemplate {
    pub name: String,
    pub id: String,
}

/// Inline error fragment for form actions.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/form_error.html")]
pub struct FormErrorTemplate {
    pub message: String,
}

/// User creation form data.
#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    pub name: String,
    pub email: String,
}

/// Users panel (HTMX).
///
/// Refreshes the users cache slot, then renders the snapshot. On failure
/// the previous view is clobbered with an explicit load-failure message
/// rather than left silently stale.
#[instrument(skip(state))]
pub async fn list_fragment(State(state): State<AppState>) -> impl IntoResponse {
    match state.cache().refresh_users(state.client()).await {
        Ok(users) => UsersTemplate { users }.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load users");
            LoadErrorTemplate {
                message: "사용자 데이터 로딩 실패".to_owned(),
            }
            .into_response()
        }
    }
}

/// Create a user (HTMX).
///
/// Only field presence is checked; a malformed email is forwarded as-is to
/// the remote store. On success the confirmation fragment carries the
/// server-assigned id and an `HX-Trigger` header refreshes the users panel.
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> impl IntoResponse {
    let name = form.name.trim().to_owned();
    let email = form.email.trim().to_owned();

    if name.is_empty() || email.is_empty() {
        return FormErrorTemplate {
            message: "이름과 이메일을 모두 입력해주세요.".to_owned(),
        }
        .into_response();
    }

    match state.client().create_user(&NewUser { name, email }).await {
        Ok(user) => {
            tracing::info!(id = %user.id, "User created");
            (
                [("HX-Trigger", "usersUpdated")],
                UserCreatedTemplate {
                    name: user.name,
                    id: user.id.into_inner(),
                },
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "User creation failed");
            FormErrorTemplate {
                message: "사용자 등록 중 오류가 발생했습니다.".to_owned(),
            }
            .into_response()
        }
    }
}
