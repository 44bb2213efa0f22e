//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HobbyHubError`] at the boundary, either via `#[from]` or an explicit
//! `From` impl that boxes the layer error into the `Storage` variant.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum HobbyHubError {
    /// A domain invariant was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A lookup or update matched no row.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Submitted credentials matched no user.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A persistence or upload backend failed.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants on user and hobby fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("hobby description must not be empty")]
    EmptyHobbyDescription,
    #[error("hobby description must be at most 50 characters")]
    HobbyDescriptionTooLong,
    #[error("date learned must not be empty")]
    MissingDateLearned,
    #[error("date learned must be a valid date")]
    InvalidDateLearned,
}

/// A lookup by id matched no row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Login failures. Carries no detail about which credential was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}
