// ABOUTME: User storage layer using SQLite
// ABOUTME: Handles CRUD operations for user accounts

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use tasklight_storage::StorageError;

use crate::types::{User, UserCreateInput};

pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user account
    pub async fn create_user(&self, input: UserCreateInput) -> Result<User, StorageError> {
        let user_id = format!("user-{}", nanoid::nanoid!());
        let now = Utc::now();

        debug!("Creating user: {} (email: {})", user_id, input.email);

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&user_id)
        .bind(&input.email)
        .bind(&input.name)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_user(&user_id).await
    }

    /// Get a single user by ID
    pub async fn get_user(&self, user_id: &str) -> Result<User, StorageError> {
        debug!("Fetching user: {}", user_id);

        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        self.row_to_user(&row)
    }

    /// Get a user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        debug!("Fetching user by email: {}", email);

        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => Ok(Some(self.row_to_user(&r)?)),
            None => Ok(None),
        }
    }

    /// Convert a database row to a User
    fn row_to_user(&self, row: &sqlx::sqlite::SqliteRow) -> Result<User, StorageError> {
        Ok(User {
            id: row.try_get("id").map_err(StorageError::Sqlx)?,
            email: row.try_get("email").map_err(StorageError::Sqlx)?,
            name: row.try_get("name").map_err(StorageError::Sqlx)?,
            created_at: row.try_get("created_at").map_err(StorageError::Sqlx)?,
        })
    }
}
