// ABOUTME: Category type definitions
// ABOUTME: Structures for the per-user category catalog

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreateInput {
    pub name: String,
    pub color: Option<String>,
}
