//! User CRUD pages.

use askama::Template;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use hobbyhub_app::ports::{FileStore, HobbyRepository, UserRepository};
use hobbyhub_domain::error::HobbyHubError;
use hobbyhub_domain::id::UserId;
use hobbyhub_domain::user::{NewUser, User};

use crate::error::JsonError;
use crate::pages::{RETRY_MESSAGE, list_unavailable, user_not_found};
use crate::state::AppState;
use crate::upload;

/// User list page template.
#[derive(Template)]
#[template(path = "user_list.html")]
pub struct UserListTemplate {
    pub users: Vec<User>,
    pub error: String,
}

impl IntoResponse for UserListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Add-user form template.
#[derive(Template)]
#[template(path = "add_user.html")]
pub struct AddUserTemplate {
    pub error: String,
}

impl IntoResponse for AddUserTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Edit-user form template.
#[derive(Template)]
#[template(path = "edit_user.html")]
pub struct EditUserTemplate {
    pub user: User,
    pub error: String,
}

impl IntoResponse for EditUserTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /users` — list all users. A storage failure renders the list view
/// with an empty set and a message rather than failing hard.
pub async fn list<UR, HR, FS>(State(state): State<AppState<UR, HR, FS>>) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    match state.user_service.list_users().await {
        Ok(users) => UserListTemplate {
            users,
            error: String::new(),
        }
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to load users");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                UserListTemplate {
                    users: Vec::new(),
                    error: "Unable to load users. Please try again.".to_string(),
                },
            )
                .into_response()
        }
    }
}

/// `GET /addUser` — render the add-user form.
pub async fn add_form() -> AddUserTemplate {
    AddUserTemplate {
        error: String::new(),
    }
}

/// `POST /addUser` — create a user, storing the uploaded image first.
///
/// The raw database error on a failed insert (e.g. a duplicate username) is
/// logged, never shown.
pub async fn create<UR, HR, FS>(
    State(state): State<AppState<UR, HR, FS>>,
    multipart: Multipart,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    let form = match upload::parse_user_form(multipart).await {
        Ok(form) => form,
        Err(err) => {
            tracing::warn!(error = %err, "unreadable multipart form");
            return add_form_error(StatusCode::BAD_REQUEST, "Invalid form submission.");
        }
    };

    if form.username.is_empty() || form.password.is_empty() {
        return add_form_error(
            StatusCode::BAD_REQUEST,
            "Username and password are required.",
        );
    }

    let profile_image = match form.upload {
        Some(file) => match state.file_store.store(file).await {
            Ok(reference) => Some(reference),
            Err(err) => {
                tracing::error!(error = %err, "failed to store profile image");
                return add_form_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not create user. Please try again.",
                );
            }
        },
        None => None,
    };

    let mut builder = NewUser::builder()
        .username(form.username)
        .password(form.password);
    if let Some(reference) = profile_image {
        builder = builder.profile_image(reference);
    }
    let user = match builder.build() {
        Ok(user) => user,
        Err(err) => return add_form_error(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    match state.user_service.create_user(user).await {
        Ok(_) => Redirect::to("/users").into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to insert user");
            add_form_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not create user. Please try again.",
            )
        }
    }
}

/// `GET /editUser/{id}` — render the edit form pre-populated.
pub async fn edit_form<UR, HR, FS>(
    State(state): State<AppState<UR, HR, FS>>,
    Path(id): Path<i64>,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    match state.user_service.get_user(UserId::from_i64(id)).await {
        Ok(user) => EditUserTemplate {
            user,
            error: String::new(),
        }
        .into_response(),
        Err(HobbyHubError::NotFound(_)) => user_not_found(),
        Err(err) => {
            tracing::error!(error = %err, "failed to load user");
            list_unavailable()
        }
    }
}

/// `POST /editUser/{id}` — apply edits. An uploaded file replaces the
/// image; otherwise the submitted `existingImage` value is kept, with a
/// `NULL` fallback when it is empty.
pub async fn update<UR, HR, FS>(
    State(state): State<AppState<UR, HR, FS>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    let id = UserId::from_i64(id);

    let form = match upload::parse_user_form(multipart).await {
        Ok(form) => form,
        Err(err) => {
            tracing::warn!(error = %err, "unreadable multipart form");
            return edit_form_with_message(
                &state,
                id,
                StatusCode::BAD_REQUEST,
                "Invalid form submission.",
            )
            .await;
        }
    };

    if form.username.is_empty() || form.password.is_empty() {
        return edit_form_with_message(
            &state,
            id,
            StatusCode::BAD_REQUEST,
            "Username and password are required.",
        )
        .await;
    }

    let profile_image = match form.upload {
        Some(file) => match state.file_store.store(file).await {
            Ok(reference) => Some(reference),
            Err(err) => {
                tracing::error!(error = %err, "failed to store profile image");
                return edit_form_with_message(
                    &state,
                    id,
                    StatusCode::INTERNAL_SERVER_ERROR,
                    RETRY_MESSAGE,
                )
                .await;
            }
        },
        None => form.existing_image.filter(|reference| !reference.is_empty()),
    };

    let user = User {
        id,
        username: form.username,
        password: form.password,
        profile_image,
    };

    match state.user_service.update_user(user).await {
        Ok(()) => Redirect::to("/users").into_response(),
        Err(HobbyHubError::NotFound(_)) => user_not_found(),
        Err(HobbyHubError::Validation(err)) => {
            edit_form_with_message(&state, id, StatusCode::BAD_REQUEST, &err.to_string()).await
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to update user");
            edit_form_with_message(
                &state,
                id,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not update user. Please try again.",
            )
            .await
        }
    }
}

/// `POST /deleteUser/{id}` — delete with no existence check. A storage
/// failure answers with a JSON error body; this is the only route that
/// does.
pub async fn delete<UR, HR, FS>(
    State(state): State<AppState<UR, HR, FS>>,
    Path(id): Path<i64>,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    match state.user_service.delete_user(UserId::from_i64(id)).await {
        Ok(()) => Redirect::to("/users").into_response(),
        Err(err) => JsonError::from(err).into_response(),
    }
}

fn add_form_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        AddUserTemplate {
            error: message.to_string(),
        },
    )
        .into_response()
}

/// Re-fetch the user so the edit form can re-render with a message; falls
/// back to the list view when the user is gone or cannot be read.
async fn edit_form_with_message<UR, HR, FS>(
    state: &AppState<UR, HR, FS>,
    id: UserId,
    status: StatusCode,
    message: &str,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    match state.user_service.get_user(id).await {
        Ok(user) => (
            status,
            EditUserTemplate {
                user,
                error: message.to_string(),
            },
        )
            .into_response(),
        Err(HobbyHubError::NotFound(_)) => user_not_found(),
        Err(err) => {
            tracing::error!(error = %err, "failed to reload user");
            list_unavailable()
        }
    }
}
