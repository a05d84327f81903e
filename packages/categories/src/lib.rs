// ABOUTME: Category management for organizing tasks
// ABOUTME: Provides types and storage for the per-user catalog and the join table

pub mod links;
pub mod storage;
pub mod types;

// Re-export main types
pub use links::CategoryLinkStorage;
pub use storage::CategoryStorage;
pub use types::{Category, CategoryCreateInput};
