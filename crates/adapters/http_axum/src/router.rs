//! Axum router assembly.

use std::path::Path;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::Key;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use hobbyhub_app::ports::{FileStore, HobbyRepository, UserRepository};

use crate::pages::{auth, hobbies, home, users};
use crate::session;
use crate::state::AppState;

/// Request bodies above this size are rejected before any handler runs.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Session cookie parameters, resolved once at startup.
pub struct SessionOptions {
    /// Key used to sign the session cookie.
    pub key: Key,
    /// Inactivity window after which a session expires.
    pub expiry_minutes: i64,
}

impl SessionOptions {
    /// Options with a freshly generated signing key.
    #[must_use]
    pub fn generated() -> Self {
        Self {
            key: Key::generate(),
            expiry_minutes: 30,
        }
    }
}

/// Build the top-level axum [`Router`].
///
/// Every route sits behind the login guard except `/`, `/login`, and
/// `/logout`; uploaded images are served from `uploads_dir` under
/// `/images/uploads`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<UR, HR, FS>(
    state: AppState<UR, HR, FS>,
    session: SessionOptions,
    uploads_dir: &Path,
) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            session.expiry_minutes,
        )))
        .with_signed(session.key);

    Router::new()
        .route("/", get(home::index))
        .route("/test", get(home::probe))
        .route(
            "/login",
            get(auth::login_form).post(auth::login::<UR, HR, FS>),
        )
        .route("/logout", get(auth::logout))
        .route("/users", get(users::list::<UR, HR, FS>))
        .route(
            "/addUser",
            get(users::add_form).post(users::create::<UR, HR, FS>),
        )
        .route(
            "/editUser/{id}",
            get(users::edit_form::<UR, HR, FS>).post(users::update::<UR, HR, FS>),
        )
        .route("/deleteUser/{id}", post(users::delete::<UR, HR, FS>))
        .route(
            "/displayHobbies/{user_id}",
            get(hobbies::list::<UR, HR, FS>),
        )
        .route(
            "/addHobbies/{user_id}",
            get(hobbies::add_form::<UR, HR, FS>).post(hobbies::create::<UR, HR, FS>),
        )
        .route(
            "/hobbies/{user_id}/delete/{hobby_id}",
            post(hobbies::delete::<UR, HR, FS>),
        )
        .nest_service("/images/uploads", ServeDir::new(uploads_dir))
        .layer(middleware::from_fn(session::require_login))
        .layer(session_layer)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use hobbyhub_app::ports::UploadedFile;
    use hobbyhub_app::services::auth_service::AuthService;
    use hobbyhub_app::services::hobby_service::HobbyService;
    use hobbyhub_app::services::user_service::UserService;
    use hobbyhub_domain::error::HobbyHubError;
    use hobbyhub_domain::hobby::{Hobby, NewHobby};
    use hobbyhub_domain::id::{HobbyId, UserId};
    use hobbyhub_domain::user::{NewUser, User};

    #[derive(Clone, Copy)]
    struct StubUserRepo;
    struct StubHobbyRepo;
    struct StubFileStore;

    impl hobbyhub_app::ports::UserRepository for StubUserRepo {
        async fn create(&self, user: NewUser) -> Result<User, HobbyHubError> {
            Ok(User {
                id: UserId::from_i64(1),
                username: user.username,
                password: user.password,
                profile_image: user.profile_image,
            })
        }
        async fn get_by_id(&self, _id: UserId) -> Result<Option<User>, HobbyHubError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<User>, HobbyHubError> {
            Ok(vec![])
        }
        async fn find_by_credentials(
            &self,
            username: &str,
            password: &str,
        ) -> Result<Option<User>, HobbyHubError> {
            if username == "greg" && password == "admin" {
                Ok(Some(User {
                    id: UserId::from_i64(1),
                    username: username.to_string(),
                    password: password.to_string(),
                    profile_image: None,
                }))
            } else {
                Ok(None)
            }
        }
        async fn update(&self, _user: User) -> Result<u64, HobbyHubError> {
            Ok(1)
        }
        async fn delete(&self, _id: UserId) -> Result<(), HobbyHubError> {
            Ok(())
        }
    }

    impl hobbyhub_app::ports::HobbyRepository for StubHobbyRepo {
        async fn create(&self, hobby: NewHobby) -> Result<Hobby, HobbyHubError> {
            Ok(Hobby {
                id: HobbyId::from_i64(1),
                user_id: hobby.user_id,
                description: hobby.description,
                date_learned: hobby.date_learned,
            })
        }
        async fn find_by_user(&self, _user_id: UserId) -> Result<Vec<Hobby>, HobbyHubError> {
            Ok(vec![])
        }
        async fn delete_for_user(
            &self,
            _user_id: UserId,
            _hobby_id: HobbyId,
        ) -> Result<u64, HobbyHubError> {
            Ok(0)
        }
    }

    impl hobbyhub_app::ports::FileStore for StubFileStore {
        async fn store(&self, file: UploadedFile) -> Result<String, HobbyHubError> {
            Ok(format!("/images/uploads/{}", file.name))
        }
    }

    fn test_router() -> Router {
        let state = AppState::new(
            UserService::new(StubUserRepo),
            HobbyService::new(StubHobbyRepo),
            AuthService::new(StubUserRepo),
            StubFileStore,
        );
        build(state, SessionOptions::generated(), Path::new("uploads"))
    }

    async fn body_text(response: axum::response::Response) -> String {
        String::from_utf8(
            response
                .into_body()
                .collect()
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_render_home_page_without_session() {
        let resp = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("hobbyhub"));
    }

    #[tokio::test]
    async fn should_render_login_page_without_session() {
        let resp = test_router()
            .oneshot(
                Request::builder()
                    .uri("/login")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("Login"));
    }

    #[tokio::test]
    async fn should_block_guarded_page_when_not_logged_in() {
        let resp = test_router()
            .oneshot(
                Request::builder()
                    .uri("/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            body_text(resp)
                .await
                .contains("Please log in to access this page")
        );
    }

    #[tokio::test]
    async fn should_complete_login_flow_and_reach_guarded_page() {
        let app = test_router();

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("username=greg&password=admin"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        let cookie = resp
            .headers()
            .get(header::SET_COOKIE)
            .expect("login should set a session cookie")
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/users")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("Users"));
    }

    #[tokio::test]
    async fn should_reject_invalid_login() {
        let resp = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("username=greg&password=wrong"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(resp).await.contains("Invalid login"));
    }

    #[tokio::test]
    async fn should_gate_probe_route() {
        let resp = test_router()
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(
            body_text(resp)
                .await
                .contains("Please log in to access this page")
        );
    }
}
