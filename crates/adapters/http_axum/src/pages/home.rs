//! Home page and liveness probe.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use tower_sessions::Session;

use crate::session::USERNAME_KEY;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Empty when nobody is logged in.
    pub username: String,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — landing page, reachable without a session.
pub async fn index(session: Session) -> HomeTemplate {
    let username = session
        .get::<String>(USERNAME_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();

    HomeTemplate { username }
}

/// `GET /test` — plain-text probe, gated like every other non-exempt page.
pub async fn probe() -> &'static str {
    "OK"
}
