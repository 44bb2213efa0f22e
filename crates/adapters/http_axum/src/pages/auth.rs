//! Login and logout handlers.

use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tower_sessions::Session;

use hobbyhub_app::ports::{FileStore, HobbyRepository, UserRepository};
use hobbyhub_domain::error::HobbyHubError;

use crate::session::{IS_LOGGED_IN_KEY, USERNAME_KEY};
use crate::state::AppState;

/// Login page template.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: String,
}

impl IntoResponse for LoginTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Credentials submitted by the login form.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// `GET /login` — render the login form.
pub async fn login_form() -> LoginTemplate {
    LoginTemplate {
        error: String::new(),
    }
}

/// `POST /login` — check credentials and mark the session authenticated.
///
/// A storage failure is logged and answered exactly like a credential
/// mismatch; no internal detail reaches the client.
pub async fn login<UR, HR, FS>(
    State(state): State<AppState<UR, HR, FS>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    let user = match state.auth_service.login(&form.username, &form.password).await {
        Ok(user) => user,
        Err(HobbyHubError::Auth(_)) => return invalid_login(),
        Err(err) => {
            tracing::error!(error = %err, "credential lookup failed");
            return invalid_login();
        }
    };

    if let Err(err) = session.insert(IS_LOGGED_IN_KEY, true).await {
        tracing::error!(error = %err, "failed to write session");
        return invalid_login();
    }
    if let Err(err) = session.insert(USERNAME_KEY, &user.username).await {
        tracing::error!(error = %err, "failed to write session");
        return invalid_login();
    }

    Redirect::to("/").into_response()
}

/// `GET /logout` — destroy the session and go home. A teardown failure is
/// logged, never surfaced.
pub async fn logout(session: Session) -> Response {
    if let Err(err) = session.flush().await {
        tracing::error!(error = %err, "failed to destroy session");
    }
    Redirect::to("/").into_response()
}

fn invalid_login() -> Response {
    (
        StatusCode::BAD_REQUEST,
        LoginTemplate {
            error: "Invalid login".to_string(),
        },
    )
        .into_response()
}
