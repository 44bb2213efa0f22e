//! Hobby pages, scoped per user.

use askama::Template;
use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::NaiveDate;
use serde::Deserialize;

use hobbyhub_app::ports::{FileStore, HobbyRepository, UserRepository};
use hobbyhub_domain::error::HobbyHubError;
use hobbyhub_domain::hobby::{Hobby, MAX_DESCRIPTION_CHARS, NewHobby};
use hobbyhub_domain::id::{HobbyId, UserId};
use hobbyhub_domain::user::User;

use crate::pages::{list_unavailable, user_not_found};
use crate::state::AppState;

/// Hobby list page template.
#[derive(Template)]
#[template(path = "hobby_list.html")]
pub struct HobbyListTemplate {
    pub user: User,
    pub hobbies: Vec<Hobby>,
    pub error: String,
    pub success: String,
}

impl IntoResponse for HobbyListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Add-hobby form template.
#[derive(Template)]
#[template(path = "add_hobby.html")]
pub struct AddHobbyTemplate {
    pub user: User,
    pub error: String,
}

impl IntoResponse for AddHobbyTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Form fields for the add-hobby page. `date_learned` arrives as text so
/// an empty submission can be told apart from a malformed one.
#[derive(Deserialize)]
pub struct AddHobbyForm {
    pub hobby_description: String,
    pub date_learned: String,
}

/// `GET /displayHobbies/{user_id}` — a user's hobbies, lowest id first.
pub async fn list<UR, HR, FS>(
    State(state): State<AppState<UR, HR, FS>>,
    Path(user_id): Path<i64>,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    let user_id = UserId::from_i64(user_id);
    let user = match state.user_service.get_user(user_id).await {
        Ok(user) => user,
        Err(HobbyHubError::NotFound(_)) => return user_not_found(),
        Err(err) => {
            tracing::error!(error = %err, "failed to load user");
            return list_unavailable();
        }
    };

    match state.hobby_service.list_for_user(user_id).await {
        Ok(hobbies) => HobbyListTemplate {
            user,
            hobbies,
            error: String::new(),
            success: String::new(),
        }
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to load hobbies");
            list_unavailable()
        }
    }
}

/// `GET /addHobbies/{user_id}` — render the add-hobby form.
pub async fn add_form<UR, HR, FS>(
    State(state): State<AppState<UR, HR, FS>>,
    Path(user_id): Path<i64>,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    match state.user_service.get_user(UserId::from_i64(user_id)).await {
        Ok(user) => AddHobbyTemplate {
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

/// `POST /addHobbies/{user_id}` — record a hobby and go back to the list.
pub async fn create<UR, HR, FS>(
    State(state): State<AppState<UR, HR, FS>>,
    Path(user_id): Path<i64>,
    Form(form): Form<AddHobbyForm>,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    let user_id = UserId::from_i64(user_id);
    let description = form.hobby_description.trim().to_string();

    if description.is_empty() || form.date_learned.is_empty() {
        return add_form_with_message(
            &state,
            user_id,
            StatusCode::BAD_REQUEST,
            "Hobby description and date learned are required.",
        )
        .await;
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return add_form_with_message(
            &state,
            user_id,
            StatusCode::BAD_REQUEST,
            "Hobby description must be at most 50 characters.",
        )
        .await;
    }
    let date_learned = match form.date_learned.parse::<NaiveDate>() {
        Ok(date) => date,
        Err(_) => {
            return add_form_with_message(
                &state,
                user_id,
                StatusCode::BAD_REQUEST,
                "Date learned must be a valid date.",
            )
            .await;
        }
    };

    let hobby = NewHobby {
        user_id,
        description,
        date_learned,
    };

    match state.hobby_service.add_hobby(hobby).await {
        Ok(_) => Redirect::to(&format!("/displayHobbies/{user_id}")).into_response(),
        Err(HobbyHubError::Validation(err)) => {
            add_form_with_message(&state, user_id, StatusCode::BAD_REQUEST, &err.to_string()).await
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to insert hobby");
            add_form_with_message(
                &state,
                user_id,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not add hobby. Please try again.",
            )
            .await
        }
    }
}

/// `POST /hobbies/{user_id}/delete/{hobby_id}` — delete only when both ids
/// match. Zero rows affected still redirects back to the list.
pub async fn delete<UR, HR, FS>(
    State(state): State<AppState<UR, HR, FS>>,
    Path((user_id, hobby_id)): Path<(i64, i64)>,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    let user_id = UserId::from_i64(user_id);
    let hobby_id = HobbyId::from_i64(hobby_id);

    match state.hobby_service.delete_hobby(user_id, hobby_id).await {
        Ok(_) => Redirect::to(&format!("/displayHobbies/{user_id}")).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to delete hobby");
            list_with_message(&state, user_id, "Could not delete hobby. Please try again.").await
        }
    }
}

/// Re-fetch the owning user so the add-hobby form can re-render with a
/// message; falls back to the list view when the user is gone or cannot be
/// read.
async fn add_form_with_message<UR, HR, FS>(
    state: &AppState<UR, HR, FS>,
    user_id: UserId,
    status: StatusCode,
    message: &str,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    match state.user_service.get_user(user_id).await {
        Ok(user) => (
            status,
            AddHobbyTemplate {
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

/// Re-fetch user and hobbies to re-render the list view with an error;
/// nested fallback to the generic list error when either fetch fails.
async fn list_with_message<UR, HR, FS>(
    state: &AppState<UR, HR, FS>,
    user_id: UserId,
    message: &str,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    let user = match state.user_service.get_user(user_id).await {
        Ok(user) => user,
        Err(HobbyHubError::NotFound(_)) => return user_not_found(),
        Err(err) => {
            tracing::error!(error = %err, "failed to reload user");
            return list_unavailable();
        }
    };

    match state.hobby_service.list_for_user(user_id).await {
        Ok(hobbies) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            HobbyListTemplate {
                user,
                hobbies,
                error: message.to_string(),
                success: String::new(),
            },
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to reload hobbies");
            list_unavailable()
        }
    }
}
