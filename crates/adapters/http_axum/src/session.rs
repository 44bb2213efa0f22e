//! Session keys and the login guard middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_sessions::Session;

use crate::pages::auth::LoginTemplate;

/// Session key holding the authentication flag.
pub const IS_LOGGED_IN_KEY: &str = "is_logged_in";
/// Session key holding the logged-in username.
pub const USERNAME_KEY: &str = "username";

/// Message shown when an unauthenticated request hits a guarded path.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access this page";

/// Paths reachable without an authenticated session.
const EXEMPT_PATHS: [&str; 3] = ["/", "/login", "/logout"];

/// Middleware applied over the whole router: requests to non-exempt paths
/// pass through only when the session says `is_logged_in`. Everything else
/// (no session, no flag, `false`, or a session-store failure) gets the
/// login view instead of the requested resource. Never errors out.
pub async fn require_login(session: Session, request: Request, next: Next) -> Response {
    if EXEMPT_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    match session.get::<bool>(IS_LOGGED_IN_KEY).await {
        Ok(Some(true)) => next.run(request).await,
        Ok(_) => login_required(),
        Err(err) => {
            tracing::error!(error = %err, "session read failed");
            login_required()
        }
    }
}

fn login_required() -> Response {
    LoginTemplate {
        error: LOGIN_REQUIRED_MESSAGE.to_string(),
    }
    .into_response()
}
