// ABOUTME: Error types for identity resolution
// ABOUTME: Covers missing sessions and user lookup failures

use tasklight_storage::StorageError;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No user is signed in")]
    NotAuthenticated,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
