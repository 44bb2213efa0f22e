//! User — an account with credentials and an optional profile image.

use serde::{Deserialize, Serialize};

use crate::error::{HobbyHubError, ValidationError};
use crate::id::UserId;

/// A stored user row.
///
/// The password is held verbatim and lookups compare it byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    /// Reference string produced by the file store: a local path such as
    /// `/images/uploads/cat.png`, or an absolute object-storage URL.
    pub profile_image: Option<String>,
}

impl User {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HobbyHubError::Validation`] when `username` or `password`
    /// is empty.
    pub fn validate(&self) -> Result<(), HobbyHubError> {
        validate_credentials(&self.username, &self.password)
    }
}

/// A user that has not been persisted yet; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub profile_image: Option<String>,
}

impl NewUser {
    /// Create a builder for constructing a [`NewUser`].
    #[must_use]
    pub fn builder() -> NewUserBuilder {
        NewUserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HobbyHubError::Validation`] when `username` or `password`
    /// is empty.
    pub fn validate(&self) -> Result<(), HobbyHubError> {
        validate_credentials(&self.username, &self.password)
    }
}

fn validate_credentials(username: &str, password: &str) -> Result<(), HobbyHubError> {
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername.into());
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }
    Ok(())
}

/// Step-by-step builder for [`NewUser`].
#[derive(Debug, Default)]
pub struct NewUserBuilder {
    username: Option<String>,
    password: Option<String>,
    profile_image: Option<String>,
}

impl NewUserBuilder {
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn profile_image(mut self, reference: impl Into<String>) -> Self {
        self.profile_image = Some(reference.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewUser`].
    ///
    /// # Errors
    ///
    /// Returns [`HobbyHubError::Validation`] if `username` or `password` is
    /// missing or empty.
    pub fn build(self) -> Result<NewUser, HobbyHubError> {
        let user = NewUser {
            username: self.username.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            profile_image: self.profile_image,
        };
        user.validate()?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_user_when_credentials_provided() {
        let user = NewUser::builder()
            .username("greg")
            .password("admin")
            .build()
            .unwrap();
        assert_eq!(user.username, "greg");
        assert!(user.profile_image.is_none());
    }

    #[test]
    fn should_return_validation_error_when_username_is_empty() {
        let result = NewUser::builder().password("admin").build();
        assert!(matches!(
            result,
            Err(HobbyHubError::Validation(ValidationError::EmptyUsername))
        ));
    }

    #[test]
    fn should_return_validation_error_when_password_is_empty() {
        let result = NewUser::builder().username("greg").build();
        assert!(matches!(
            result,
            Err(HobbyHubError::Validation(ValidationError::EmptyPassword))
        ));
    }

    #[test]
    fn should_build_user_with_profile_image() {
        let user = NewUser::builder()
            .username("greg")
            .password("admin")
            .profile_image("/images/uploads/greg.png")
            .build()
            .unwrap();
        assert_eq!(
            user.profile_image.as_deref(),
            Some("/images/uploads/greg.png")
        );
    }

    #[test]
    fn should_reject_stored_user_with_empty_password() {
        let user = User {
            id: UserId::from_i64(1),
            username: "greg".to_string(),
            password: String::new(),
            profile_image: None,
        };
        assert!(matches!(
            user.validate(),
            Err(HobbyHubError::Validation(ValidationError::EmptyPassword))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let user = User {
            id: UserId::from_i64(3),
            username: "greg".to_string(),
            password: "admin".to_string(),
            profile_image: Some("/images/uploads/greg.png".to_string()),
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, user.id);
        assert_eq!(parsed.profile_image, user.profile_image);
    }
}
