// ABOUTME: Task editing form core for Tasklight
// ABOUTME: Draft state, category catalog loading, and the save reconciliation procedure

pub mod catalog;
pub mod context;
pub mod draft;
pub mod error;
pub mod form;
pub mod reconcile;

// Re-export main types
pub use catalog::CategoryCatalog;
pub use context::FormContext;
pub use draft::TaskDraft;
pub use error::FormError;
pub use form::{FormMode, SubmitState, TaskForm};
pub use reconcile::{reconcile, SubmitOutcome};
