// ABOUTME: In-memory edit buffer for one task
// ABOUTME: Holds field values and the working selected-category set

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use tasklight_tasks::{Task, TaskInput, TaskPriority, TaskStatus};

/// Draft values for a task being created or edited.
///
/// Fields are set by direct overwrite; nothing is validated until submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub selected_category_ids: BTreeSet<String>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: None,
            selected_category_ids: BTreeSet::new(),
        }
    }
}

impl TaskDraft {
    /// Populate a draft from an existing task, field for field.
    ///
    /// The selected-category set starts empty; the caller loads the task's
    /// linked ids separately.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date.map(|dt| dt.date_naive()),
            selected_category_ids: BTreeSet::new(),
        }
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(&mut self, category_id: &str) {
        if !self.selected_category_ids.remove(category_id) {
            self.selected_category_ids.insert(category_id.to_string());
        }
    }

    /// Return every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Convert the draft into the storage write payload.
    ///
    /// An empty description becomes NULL and the calendar date widens to a
    /// UTC midnight timestamp, matching what the stored columns hold.
    pub fn to_input(&self) -> TaskInput {
        TaskInput {
            title: self.title.trim().to_string(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            status: self.status,
            priority: self.priority,
            due_date: self
                .due_date
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
        }
    }
}
