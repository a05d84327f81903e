// ABOUTME: Category catalog loading for the editing form
// ABOUTME: Load failures degrade to an empty catalog and never block the form

use std::collections::BTreeSet;

use tracing::warn;

use tasklight_categories::{Category, CategoryLinkStorage, CategoryStorage};

/// The user's categories, as offered for selection in the form.
#[derive(Debug, Default)]
pub struct CategoryCatalog {
    pub categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Load the full per-user catalog, ordered by name.
    ///
    /// On a store error the catalog is left empty and the failure is only
    /// logged; the user simply sees no categories.
    pub async fn load(storage: &CategoryStorage, user_id: &str) -> Self {
        match storage.list_categories(user_id).await {
            Ok(categories) => Self { categories },
            Err(err) => {
                warn!("Failed to load category catalog: {}", err);
                Self::default()
            }
        }
    }

    /// Load the category ids already linked to a task, for pre-checking the
    /// selection in edit mode. Degrades to an empty set on error.
    pub async fn linked_ids(links: &CategoryLinkStorage, task_id: &str) -> BTreeSet<String> {
        match links.list_category_ids(task_id).await {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                warn!(
                    "Failed to load linked categories for task {}: {}",
                    task_id, err
                );
                BTreeSet::new()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
