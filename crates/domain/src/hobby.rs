//! Hobby — a dated record of something a user learned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HobbyHubError, ValidationError};
use crate::id::{HobbyId, UserId};

/// Longest allowed `description`, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 50;

/// A stored hobby row.
///
/// `user_id` references the owning [`User`](crate::user::User) but carries
/// no database constraint; deleting a user leaves its hobby rows behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hobby {
    pub id: HobbyId,
    pub user_id: UserId,
    pub description: String,
    pub date_learned: NaiveDate,
}

/// A hobby that has not been persisted yet; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHobby {
    pub user_id: UserId,
    pub description: String,
    pub date_learned: NaiveDate,
}

impl NewHobby {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HobbyHubError::Validation`] when the description is blank
    /// or longer than [`MAX_DESCRIPTION_CHARS`].
    pub fn validate(&self) -> Result<(), HobbyHubError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyHobbyDescription.into());
        }
        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(ValidationError::HobbyDescriptionTooLong.into());
        }
        Ok(())
    }
}
