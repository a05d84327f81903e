// ABOUTME: Local input validation shared by the editing form and storages
// ABOUTME: Checks run before any database call is issued

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Category name cannot be empty")]
    EmptyCategoryName,
}

/// Validate a task title, returning the trimmed value.
///
/// Titles consisting only of whitespace are rejected.
pub fn validate_title(title: &str) -> Result<&str, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed)
}

/// Validate a category name, returning the trimmed value.
pub fn validate_category_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCategoryName);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("Buy milk"), Ok("Buy milk"));
        assert_eq!(validate_title("  padded  "), Ok("padded"));
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("   "), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_category_name() {
        assert_eq!(validate_category_name("Work"), Ok("Work"));
        assert_eq!(
            validate_category_name("  "),
            Err(ValidationError::EmptyCategoryName)
        );
    }
}
