//! Shared application state for axum handlers.

use std::sync::Arc;

use hobbyhub_app::ports::{FileStore, HobbyRepository, UserRepository};
use hobbyhub_app::services::auth_service::AuthService;
use hobbyhub_app::services::hobby_service::HobbyService;
use hobbyhub_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types and the file store to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, HR, FS> {
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Hobby service.
    pub hobby_service: Arc<HobbyService<HR>>,
    /// Credential check service.
    pub auth_service: Arc<AuthService<UR>>,
    /// File store for profile image uploads, chosen once at startup.
    pub file_store: Arc<FS>,
}

impl<UR, HR, FS> Clone for AppState<UR, HR, FS> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            hobby_service: Arc::clone(&self.hobby_service),
            auth_service: Arc::clone(&self.auth_service),
            file_store: Arc::clone(&self.file_store),
        }
    }
}

impl<UR, HR, FS> AppState<UR, HR, FS>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        hobby_service: HobbyService<HR>,
        auth_service: AuthService<UR>,
        file_store: FS,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            hobby_service: Arc::new(hobby_service),
            auth_service: Arc::new(auth_service),
            file_store: Arc::new(file_store),
        }
    }
}
