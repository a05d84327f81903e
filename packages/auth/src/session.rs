// ABOUTME: Session-backed AuthProvider implementation
// ABOUTME: Resolves a user once from storage and answers current_user synchronously

use tracing::debug;

use crate::error::AuthResult;
use crate::provider::AuthProvider;
use crate::storage::UserStorage;
use crate::types::CurrentUser;

/// A session resolved at application start.
///
/// Holds the signed-in user, or nothing for an anonymous session.
#[derive(Debug, Clone, Default)]
pub struct SessionAuth {
    user: Option<CurrentUser>,
}

impl SessionAuth {
    /// A session with no signed-in user.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// A session for an already-known identity.
    pub fn authenticated(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    /// Resolve a session for the user with the given email.
    ///
    /// Returns an anonymous session when no such user exists.
    pub async fn resolve(storage: &UserStorage, email: &str) -> AuthResult<Self> {
        match storage.get_user_by_email(email).await? {
            Some(user) => {
                debug!("Resolved session for user: {}", user.id);
                Ok(Self::authenticated(CurrentUser::from(&user)))
            }
            None => {
                debug!("No user for email, starting anonymous session");
                Ok(Self::anonymous())
            }
        }
    }
}

impl AuthProvider for SessionAuth {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.clone()
    }
}
