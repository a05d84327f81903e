// ABOUTME: Task storage layer using SQLite
// ABOUTME: Handles CRUD operations and filtered listing for tasks

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use tasklight_storage::StorageError;

use crate::types::{Task, TaskFilter, TaskInput};

pub struct TaskStorage {
    pool: SqlitePool,
}

impl TaskStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new task owned by the given user
    pub async fn create_task(&self, user_id: &str, input: TaskInput) -> Result<Task, StorageError> {
        let task_id = format!("task-{}", nanoid::nanoid!());
        let now = Utc::now();

        debug!("Creating task: {} (title: {})", task_id, input.title);

        sqlx::query(
            r#"
            INSERT INTO tasks (id, user_id, title, description, status, priority, due_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&task_id)
        .bind(user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.status)
        .bind(input.priority)
        .bind(input.due_date)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_task(&task_id).await
    }

    /// Get a single task by ID
    pub async fn get_task(&self, task_id: &str) -> Result<Task, StorageError> {
        debug!("Fetching task: {}", task_id);

        let row = sqlx::query("SELECT * FROM tasks WHERE id = ?")
            .bind(task_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        self.row_to_task(&row)
    }

    /// Overwrite every editable field of an existing task.
    ///
    /// The id and created_at columns are untouched.
    pub async fn update_task(&self, task_id: &str, input: TaskInput) -> Result<Task, StorageError> {
        debug!("Updating task: {}", task_id);

        sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, status = ?, priority = ?, due_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.status)
        .bind(input.priority)
        .bind(input.due_date)
        .bind(task_id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_task(task_id).await
    }

    /// Delete a task permanently
    pub async fn delete_task(&self, task_id: &str) -> Result<(), StorageError> {
        debug!("Deleting task: {}", task_id);

        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// List a user's tasks, newest first, optionally filtered by status
    /// and by a case-insensitive substring of title or description
    pub async fn list_tasks(
        &self,
        user_id: &str,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, StorageError> {
        debug!("Fetching tasks for user: {} (filter: {:?})", user_id, filter);

        let mut sql = String::from("SELECT * FROM tasks WHERE user_id = ?");
        if filter.status.is_some() {
            sql.push_str(" AND status = ?");
        }
        if filter.search.is_some() {
            sql.push_str(" AND (title LIKE ? OR description LIKE ?)");
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = sqlx::query(&sql).bind(user_id);
        if let Some(status) = filter.status {
            query = query.bind(status);
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            query = query.bind(pattern.clone()).bind(pattern);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let tasks = rows
            .iter()
            .map(|row| self.row_to_task(row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    /// Convert a database row to a Task
    fn row_to_task(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Task, StorageError> {
        Ok(Task {
            id: row.try_get("id").map_err(StorageError::Sqlx)?,
            user_id: row.try_get("user_id").map_err(StorageError::Sqlx)?,
            title: row.try_get("title").map_err(StorageError::Sqlx)?,
            description: row.try_get("description").map_err(StorageError::Sqlx)?,
            status: row.try_get("status").map_err(StorageError::Sqlx)?,
            priority: row.try_get("priority").map_err(StorageError::Sqlx)?,
            due_date: row.try_get("due_date").map_err(StorageError::Sqlx)?,
            created_at: row.try_get("created_at").map_err(StorageError::Sqlx)?,
        })
    }
}
