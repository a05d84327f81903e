// ABOUTME: Category storage layer using SQLite
// ABOUTME: Handles the per-user catalog ordered by name

use sqlx::{Row, SqlitePool};
use tracing::debug;

use tasklight_storage::StorageError;

use crate::types::{Category, CategoryCreateInput};

pub struct CategoryStorage {
    pool: SqlitePool,
}

impl CategoryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a user's categories, ordered by name ascending
    pub async fn list_categories(&self, user_id: &str) -> Result<Vec<Category>, StorageError> {
        debug!("Fetching categories for user: {}", user_id);

        let rows = sqlx::query("SELECT * FROM categories WHERE user_id = ? ORDER BY name")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let categories = rows
            .iter()
            .map(|row| self.row_to_category(row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Get a single category by ID
    pub async fn get_category(&self, category_id: &str) -> Result<Category, StorageError> {
        debug!("Fetching category: {}", category_id);

        let row = sqlx::query("SELECT * FROM categories WHERE id = ?")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        self.row_to_category(&row)
    }

    /// Create a new category owned by the given user
    pub async fn create_category(
        &self,
        user_id: &str,
        input: CategoryCreateInput,
    ) -> Result<Category, StorageError> {
        let category_id = format!("cat-{}", nanoid::nanoid!());

        debug!("Creating category: {} (name: {})", category_id, input.name);

        sqlx::query(
            r#"
            INSERT INTO categories (id, user_id, name, color)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&category_id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.color)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_category(&category_id).await
    }

    /// Convert a database row to a Category
    fn row_to_category(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Category, StorageError> {
        Ok(Category {
            id: row.try_get("id").map_err(StorageError::Sqlx)?,
            user_id: row.try_get("user_id").map_err(StorageError::Sqlx)?,
            name: row.try_get("name").map_err(StorageError::Sqlx)?,
            color: row.try_get("color").map_err(StorageError::Sqlx)?,
        })
    }
}
