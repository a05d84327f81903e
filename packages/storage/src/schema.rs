// ABOUTME: Schema initialization for the Tasklight collections
// ABOUTME: Idempotent table and index creation for users, tasks, categories, and links

use sqlx::SqlitePool;
use tracing::debug;

use crate::{StorageError, StorageResult};

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    name TEXT,
    created_at TEXT NOT NULL
)
"#;

const CREATE_TASKS: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id),
    title TEXT NOT NULL,
    description TEXT,
    status TEXT NOT NULL DEFAULT 'pending',
    priority TEXT NOT NULL DEFAULT 'medium',
    due_date TEXT,
    created_at TEXT NOT NULL
)
"#;

const CREATE_CATEGORIES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id),
    name TEXT NOT NULL,
    color TEXT
)
"#;

const CREATE_TASK_CATEGORIES: &str = r#"
CREATE TABLE IF NOT EXISTS task_categories (
    task_id TEXT NOT NULL REFERENCES tasks(id) ON DELETE CASCADE,
    category_id TEXT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    user_id TEXT NOT NULL,
    PRIMARY KEY (task_id, category_id)
)
"#;

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_tasks_user ON tasks(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_categories_user ON categories(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_task_categories_task ON task_categories(task_id)",
];

/// Create all Tasklight tables and indexes. Safe to call on every startup.
pub async fn initialize_schema(pool: &SqlitePool) -> StorageResult<()> {
    debug!("Initializing database schema");

    for statement in [
        CREATE_USERS,
        CREATE_TASKS,
        CREATE_CATEGORIES,
        CREATE_TASK_CATEGORIES,
    ] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(StorageError::Sqlx)?;
    }

    for statement in CREATE_INDEXES {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(StorageError::Sqlx)?;
    }

    Ok(())
}
