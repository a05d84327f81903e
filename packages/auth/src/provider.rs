// ABOUTME: The AuthProvider boundary
// ABOUTME: Synchronous current-user lookup against an already-loaded session

use crate::types::CurrentUser;

/// Supplies the signed-in user, if any.
///
/// Resolution is synchronous: implementations hold a session that was loaded
/// before the form opened, so submission never waits on the network to learn
/// who is signed in.
pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;
}
