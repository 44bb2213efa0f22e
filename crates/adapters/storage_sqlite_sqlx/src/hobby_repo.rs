//! `SQLite` implementation of [`HobbyRepository`].

use std::future::Future;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hobbyhub_app::ports::HobbyRepository;
use hobbyhub_domain::error::HobbyHubError;
use hobbyhub_domain::hobby::{Hobby, NewHobby};
use hobbyhub_domain::id::{HobbyId, UserId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Hobby`].
struct Wrapper(Hobby);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let user_id: i64 = row.try_get("user_id")?;
        let description: String = row.try_get("hobby_description")?;
        let date_learned: NaiveDate = row.try_get("date_learned")?;

        Ok(Self(Hobby {
            id: HobbyId::from_i64(id),
            user_id: UserId::from_i64(user_id),
            description,
            date_learned,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO hobbies (user_id, hobby_description, date_learned) VALUES (?, ?, ?)";
const SELECT_BY_USER: &str = "SELECT * FROM hobbies WHERE user_id = ? ORDER BY id ASC";
const DELETE_BY_PAIR: &str = "DELETE FROM hobbies WHERE id = ? AND user_id = ?";

/// `SQLite`-backed hobby repository.
pub struct SqliteHobbyRepository {
    pool: SqlitePool,
}

impl SqliteHobbyRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HobbyRepository for SqliteHobbyRepository {
    fn create(
        &self,
        hobby: NewHobby,
    ) -> impl Future<Output = Result<Hobby, HobbyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(hobby.user_id.as_i64())
                .bind(&hobby.description)
                .bind(hobby.date_learned)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Hobby {
                id: HobbyId::from_i64(result.last_insert_rowid()),
                user_id: hobby.user_id,
                description: hobby.description,
                date_learned: hobby.date_learned,
            })
        }
    }

    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Hobby>, HobbyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_USER)
                .bind(user_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete_for_user(
        &self,
        user_id: UserId,
        hobby_id: HobbyId,
    ) -> impl Future<Output = Result<u64, HobbyHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_PAIR)
                .bind(hobby_id.as_i64())
                .bind(user_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteHobbyRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteHobbyRepository::new(db.pool().clone())
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn test_hobby(user_id: i64, description: &str) -> NewHobby {
        NewHobby {
            user_id: UserId::from_i64(user_id),
            description: description.to_string(),
            date_learned: date("2024-05-01"),
        }
    }

    #[tokio::test]
    async fn should_create_and_list_hobbies_ordered_by_id() {
        let repo = setup().await;
        repo.create(test_hobby(1, "Baking")).await.unwrap();
        repo.create(test_hobby(1, "Chess")).await.unwrap();

        let hobbies = repo.find_by_user(UserId::from_i64(1)).await.unwrap();
        assert_eq!(hobbies.len(), 2);
        assert!(hobbies[0].id.as_i64() < hobbies[1].id.as_i64());
        assert_eq!(hobbies[0].description, "Baking");
    }

    #[tokio::test]
    async fn should_scope_listing_to_user() {
        let repo = setup().await;
        repo.create(test_hobby(1, "Baking")).await.unwrap();
        repo.create(test_hobby(2, "Chess")).await.unwrap();

        let hobbies = repo.find_by_user(UserId::from_i64(2)).await.unwrap();
        assert_eq!(hobbies.len(), 1);
        assert_eq!(hobbies[0].description, "Chess");
    }

    #[tokio::test]
    async fn should_store_date_through_roundtrip() {
        let repo = setup().await;
        let created = repo.create(test_hobby(1, "Baking")).await.unwrap();

        let fetched = repo.find_by_user(UserId::from_i64(1)).await.unwrap();
        assert_eq!(fetched[0].date_learned, created.date_learned);
    }

    #[tokio::test]
    async fn should_delete_when_pair_matches() {
        let repo = setup().await;
        let created = repo.create(test_hobby(1, "Baking")).await.unwrap();

        let affected = repo
            .delete_for_user(UserId::from_i64(1), created.id)
            .await
            .unwrap();

        assert_eq!(affected, 1);
        assert!(
            repo.find_by_user(UserId::from_i64(1))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn should_not_delete_when_user_id_differs() {
        let repo = setup().await;
        let created = repo.create(test_hobby(7, "Baking")).await.unwrap();

        let affected = repo
            .delete_for_user(UserId::from_i64(5), created.id)
            .await
            .unwrap();

        assert_eq!(affected, 0);
        let remaining = repo.find_by_user(UserId::from_i64(7)).await.unwrap();
        assert_eq!(remaining.len(), 1);
    }
}
