//! Hobby service — use-cases for per-user hobby records.

use hobbyhub_domain::error::HobbyHubError;
use hobbyhub_domain::hobby::{Hobby, NewHobby};
use hobbyhub_domain::id::{HobbyId, UserId};

use crate::ports::HobbyRepository;

/// Application service for hobby operations. Hobbies have no update
/// use-case; rows are only created, listed, and deleted.
pub struct HobbyService<R> {
    repo: R,
}

impl<R: HobbyRepository> HobbyService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Record a new hobby after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HobbyHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn add_hobby(&self, hobby: NewHobby) -> Result<Hobby, HobbyHubError> {
        hobby.validate()?;
        self.repo.create(hobby).await
    }

    /// List a user's hobbies ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Hobby>, HobbyHubError> {
        self.repo.find_by_user(user_id).await
    }

    /// Delete the hobby matching BOTH ids, returning the number of rows
    /// removed. A pair that matches nothing removes zero rows and is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_hobby(
        &self,
        user_id: UserId,
        hobby_id: HobbyId,
    ) -> Result<u64, HobbyHubError> {
        self.repo.delete_for_user(user_id, hobby_id).await
    }
}
