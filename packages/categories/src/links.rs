// ABOUTME: Storage for the task_categories join table
// ABOUTME: Link rows are rewritten wholesale by each task save, never edited

use sqlx::{QueryBuilder, SqlitePool};
use tracing::debug;

use tasklight_storage::StorageError;

pub struct CategoryLinkStorage {
    pool: SqlitePool,
}

impl CategoryLinkStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the category ids currently linked to a task
    pub async fn list_category_ids(&self, task_id: &str) -> Result<Vec<String>, StorageError> {
        debug!("Fetching linked category ids for task: {}", task_id);

        let ids = sqlx::query_scalar("SELECT category_id FROM task_categories WHERE task_id = ?")
            .bind(task_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(ids)
    }

    /// Delete every link row for a task
    pub async fn delete_for_task(&self, task_id: &str) -> Result<(), StorageError> {
        debug!("Clearing category links for task: {}", task_id);

        sqlx::query("DELETE FROM task_categories WHERE task_id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// Insert one link row per category id, as a single batched statement.
    ///
    /// Batch atomicity is whatever SQLite provides for a multi-row insert;
    /// callers must not rely on it.
    pub async fn insert_links(
        &self,
        task_id: &str,
        user_id: &str,
        category_ids: &[String],
    ) -> Result<(), StorageError> {
        if category_ids.is_empty() {
            return Ok(());
        }

        debug!(
            "Linking {} categories to task: {}",
            category_ids.len(),
            task_id
        );

        // Column names are hardcoded; values go through push_bind
        let mut query_builder =
            QueryBuilder::new("INSERT INTO task_categories (task_id, category_id, user_id) ");
        query_builder.push_values(category_ids, |mut b, category_id| {
            b.push_bind(task_id).push_bind(category_id).push_bind(user_id);
        });

        query_builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(())
    }
}
