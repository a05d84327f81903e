// ABOUTME: Task records and queries for Tasklight
// ABOUTME: Provides CRUD operations and filtered listing for tasks

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
