//! User service — use-cases for managing users.

use hobbyhub_domain::error::{HobbyHubError, NotFoundError};
use hobbyhub_domain::id::UserId;
use hobbyhub_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HobbyHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_user(&self, user: NewUser) -> Result<User, HobbyHubError> {
        user.validate()?;
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HobbyHubError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, HobbyHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HobbyHubError> {
        self.repo.get_all().await
    }

    /// Update an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`HobbyHubError::Validation`] if invariants fail,
    /// [`HobbyHubError::NotFound`] when the update touches zero rows, or a
    /// storage error from the repository.
    pub async fn update_user(&self, user: User) -> Result<(), HobbyHubError> {
        user.validate()?;
        let id = user.id;
        let affected = self.repo.update(user).await?;
        if affected == 0 {
            return Err(NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Delete a user by id. Hobbies owned by the user are left in place.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_user(&self, id: UserId) -> Result<(), HobbyHubError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobbyhub_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Rows {
        by_id: HashMap<UserId, User>,
        next_id: i64,
    }

    #[derive(Default)]
    struct InMemoryUserRepo {
        rows: Mutex<Rows>,
    }

    impl UserRepository for InMemoryUserRepo {
        fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HobbyHubError>> + Send {
            let mut rows = self.rows.lock().unwrap();
            rows.next_id += 1;
            let user = User {
                id: UserId::from_i64(rows.next_id),
                username: user.username,
                password: user.password,
                profile_image: user.profile_image,
            };
            rows.by_id.insert(user.id, user.clone());
            async move { Ok(user) }
        }

        fn get_by_id(
            &self,
            id: UserId,
        ) -> impl Future<Output = Result<Option<User>, HobbyHubError>> + Send {
            let rows = self.rows.lock().unwrap();
            let result = rows.by_id.get(&id).cloned();
            async move { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HobbyHubError>> + Send {
            let rows = self.rows.lock().unwrap();
            let result: Vec<User> = rows.by_id.values().cloned().collect();
            async move { Ok(result) }
        }

        fn find_by_credentials(
            &self,
            username: &str,
            password: &str,
        ) -> impl Future<Output = Result<Option<User>, HobbyHubError>> + Send {
            let rows = self.rows.lock().unwrap();
            let result = rows
                .by_id
                .values()
                .find(|user| user.username == username && user.password == password)
                .cloned();
            async move { Ok(result) }
        }

        fn update(&self, user: User) -> impl Future<Output = Result<u64, HobbyHubError>> + Send {
            let mut rows = self.rows.lock().unwrap();
            let affected = if rows.by_id.contains_key(&user.id) {
                rows.by_id.insert(user.id, user);
                1
            } else {
                0
            };
            async move { Ok(affected) }
        }

        fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HobbyHubError>> + Send {
            let mut rows = self.rows.lock().unwrap();
            rows.by_id.remove(&id);
            async move { Ok(()) }
        }
    }

    fn make_service() -> UserService<InMemoryUserRepo> {
        UserService::new(InMemoryUserRepo::default())
    }

    fn valid_user() -> NewUser {
        NewUser::builder()
            .username("greg")
            .password("admin")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_user_when_valid() {
        let svc = make_service();

        let created = svc.create_user(valid_user()).await.unwrap();

        let fetched = svc.get_user(created.id).await.unwrap();
        assert_eq!(fetched.username, "greg");
    }

    #[tokio::test]
    async fn should_reject_create_when_username_is_empty() {
        let svc = make_service();
        let mut user = valid_user();
        user.username = String::new();

        let result = svc.create_user(user).await;
        assert!(matches!(
            result,
            Err(HobbyHubError::Validation(ValidationError::EmptyUsername))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get_user(UserId::from_i64(99)).await;
        assert!(matches!(result, Err(HobbyHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_users() {
        let svc = make_service();
        svc.create_user(valid_user()).await.unwrap();
        svc.create_user(
            NewUser::builder()
                .username("ada")
                .password("pass")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

        let all = svc.list_users().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_update_user() {
        let svc = make_service();
        let created = svc.create_user(valid_user()).await.unwrap();

        let mut updated = created.clone();
        updated.profile_image = Some("/images/uploads/greg.png".to_string());
        svc.update_user(updated).await.unwrap();

        let fetched = svc.get_user(created.id).await.unwrap();
        assert_eq!(
            fetched.profile_image.as_deref(),
            Some("/images/uploads/greg.png")
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_user() {
        let svc = make_service();
        let ghost = User {
            id: UserId::from_i64(42),
            username: "ghost".to_string(),
            password: "boo".to_string(),
            profile_image: None,
        };

        let result = svc.update_user(ghost).await;
        assert!(matches!(result, Err(HobbyHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_user() {
        let svc = make_service();
        let created = svc.create_user(valid_user()).await.unwrap();

        svc.delete_user(created.id).await.unwrap();

        let result = svc.get_user(created.id).await;
        assert!(matches!(result, Err(HobbyHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_treat_deleting_missing_user_as_success() {
        let svc = make_service();
        assert!(svc.delete_user(UserId::from_i64(5)).await.is_ok());
    }
}
