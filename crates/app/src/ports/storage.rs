//! Storage port — repository traits for persistence.

use std::future::Future;

use hobbyhub_domain::error::HobbyHubError;
use hobbyhub_domain::hobby::{Hobby, NewHobby};
use hobbyhub_domain::id::{HobbyId, UserId};
use hobbyhub_domain::user::{NewUser, User};

/// Persistence operations over the `users` table.
pub trait UserRepository {
    /// Insert a new row and return it with the store-assigned id.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HobbyHubError>> + Send;

    /// Fetch a user by id, or `None` when absent.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HobbyHubError>> + Send;

    /// Fetch every user.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HobbyHubError>> + Send;

    /// Fetch the single user whose username AND password match exactly,
    /// case-sensitively, or `None`.
    fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<Option<User>, HobbyHubError>> + Send;

    /// Overwrite every mutable column of the row with `user.id`, returning
    /// the number of rows affected.
    fn update(&self, user: User) -> impl Future<Output = Result<u64, HobbyHubError>> + Send;

    /// Delete by id. Deleting an absent id is not an error.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HobbyHubError>> + Send;
}

/// Persistence operations over the `hobbies` table.
pub trait HobbyRepository {
    /// Insert a new row and return it with the store-assigned id.
    fn create(
        &self,
        hobby: NewHobby,
    ) -> impl Future<Output = Result<Hobby, HobbyHubError>> + Send;

    /// Fetch a user's hobbies ordered by ascending id.
    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Hobby>, HobbyHubError>> + Send;

    /// Delete the row matching BOTH ids, returning the number of rows
    /// affected. A non-matching pair deletes nothing and is not an error.
    fn delete_for_user(
        &self,
        user_id: UserId,
        hobby_id: HobbyId,
    ) -> impl Future<Output = Result<u64, HobbyHubError>> + Send;
}
