//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hobbyhub_app::ports::UserRepository;
use hobbyhub_domain::error::HobbyHubError;
use hobbyhub_domain::id::UserId;
use hobbyhub_domain::user::{NewUser, User};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let username: String = row.try_get("username")?;
        let password: String = row.try_get("password")?;
        let profile_image: Option<String> = row.try_get("profile_image")?;

        Ok(Self(User {
            id: UserId::from_i64(id),
            username,
            password,
            profile_image,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (username, password, profile_image) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users";
const SELECT_BY_CREDENTIALS: &str = "SELECT * FROM users WHERE username = ? AND password = ?";
const UPDATE: &str = "UPDATE users SET username = ?, password = ?, profile_image = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HobbyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&user.username)
                .bind(&user.password)
                .bind(&user.profile_image)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(User {
                id: UserId::from_i64(result.last_insert_rowid()),
                username: user.username,
                password: user.password,
                profile_image: user.profile_image,
            })
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HobbyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HobbyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<Option<User>, HobbyHubError>> + Send {
        let pool = self.pool.clone();
        let username = username.to_owned();
        let password = password.to_owned();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_CREDENTIALS)
                .bind(username)
                .bind(password)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<u64, HobbyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&user.username)
                .bind(&user.password)
                .bind(&user.profile_image)
                .bind(user.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HobbyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
