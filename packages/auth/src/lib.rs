// ABOUTME: User identity and session resolution for Tasklight
// ABOUTME: Provides the AuthProvider boundary consumed by the editing form

pub mod error;
pub mod provider;
pub mod session;
pub mod storage;
pub mod types;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use provider::AuthProvider;
pub use session::SessionAuth;
pub use storage::UserStorage;
pub use types::{CurrentUser, User, UserCreateInput};
