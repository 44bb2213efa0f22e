//! Server-side rendered HTML pages (no JavaScript).

pub mod auth;
pub mod hobbies;
pub mod home;
pub mod users;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use self::users::UserListTemplate;

/// Generic retry message shown when a storage operation fails.
pub(crate) const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

/// 404 fallback: the user list view with a "User not found" message.
pub(crate) fn user_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        UserListTemplate {
            users: Vec::new(),
            error: "User not found".to_string(),
        },
    )
        .into_response()
}

/// 500 fallback: the user list view with a generic error message.
pub(crate) fn list_unavailable() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        UserListTemplate {
            users: Vec::new(),
            error: RETRY_MESSAGE.to_string(),
        },
    )
        .into_response()
}
