// ABOUTME: Data layer and persistence for Tasklight
// ABOUTME: SQLite pool construction, schema initialization, and storage errors

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod schema;
pub mod sqlite;

pub use schema::initialize_schema;
pub use sqlite::{connect, connect_memory};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub database_path: PathBuf,
    pub enable_wal: bool,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: tasklight_core::database_file(),
            enable_wal: true,
            max_connections: 10,
            busy_timeout_seconds: 30,
        }
    }
}
