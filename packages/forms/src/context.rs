// ABOUTME: Bundles the collaborators the editing form talks to
// ABOUTME: Storages share one pool; the auth provider is passed in, never global

use std::sync::Arc;

use sqlx::SqlitePool;

use tasklight_auth::AuthProvider;
use tasklight_categories::{CategoryLinkStorage, CategoryStorage};
use tasklight_tasks::TaskStorage;

pub struct FormContext {
    pub tasks: TaskStorage,
    pub categories: CategoryStorage,
    pub links: CategoryLinkStorage,
    pub auth: Arc<dyn AuthProvider>,
}

impl FormContext {
    pub fn new(pool: SqlitePool, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            tasks: TaskStorage::new(pool.clone()),
            categories: CategoryStorage::new(pool.clone()),
            links: CategoryLinkStorage::new(pool),
            auth,
        }
    }
}
