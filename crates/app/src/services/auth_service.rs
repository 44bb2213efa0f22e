//! Auth service — credential checks against the user store.
//!
//! Credentials are compared verbatim against the stored values; there is
//! no hashing step anywhere in the lookup.

use hobbyhub_domain::error::{AuthError, HobbyHubError};
use hobbyhub_domain::user::User;

use crate::ports::UserRepository;

/// Application service for login checks.
pub struct AuthService<R> {
    repo: R,
}

impl<R: UserRepository> AuthService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Return the user whose username AND password match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`HobbyHubError::Auth`] when no user matches, or a storage
    /// error propagated from the repository.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, HobbyHubError> {
        self.repo
            .find_by_credentials(username, password)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials.into())
    }
}
