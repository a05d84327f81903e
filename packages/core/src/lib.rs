// ABOUTME: Core constants and validation for Tasklight
// ABOUTME: Foundational package shared across all Tasklight packages

pub mod constants;
pub mod validation;

// Re-export constants
pub use constants::{database_file, tasklight_dir};

// Re-export validation
pub use validation::{validate_category_name, validate_title, ValidationError};
