//! Session token storage.

use crate::error::ClientError;

/// Holds the bearer token for the current user.
///
/// Set on login, cleared on logout and read before every outgoing request.
/// Reads never fail: unreadable or unavailable storage yields `None`.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::FileSessionStore`] - persists across runs
/// - [`crate::infrastructure::session::MemorySessionStore`] - process lifetime only
/// - [`crate::infrastructure::session::NullSessionStore`] - inert, never holds a token
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Current token, if any.
    fn get(&self) -> Option<String>;

    /// Replaces the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] if the token could not be written.
    fn set(&self, token: &str) -> Result<(), ClientError>;

    /// Removes the stored token. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), ClientError>;

    /// Returns true if a token is present.
    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}
