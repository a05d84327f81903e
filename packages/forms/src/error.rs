// ABOUTME: Error taxonomy for the editing form
// ABOUTME: The submit handler is the single point translating these into user-visible text

use tasklight_auth::AuthError;
use tasklight_core::ValidationError;
use tasklight_storage::StorageError;
use thiserror::Error;

/// Everything a form operation can fail with.
///
/// Validation and auth errors are pre-flight and mean no write was
/// attempted; store errors pass the backend message through verbatim.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Store(#[from] StorageError),
}

impl FormError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FormError::Validation(_))
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, FormError::Auth(_))
    }
}
