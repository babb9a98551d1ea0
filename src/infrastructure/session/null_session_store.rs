//! Inert session store for contexts without persistent storage.

use crate::domain::gateways::SessionStore;
use crate::error::ClientError;
use tracing::debug;

/// A session store that never holds a token.
///
/// Used when no storage location is available. Reads yield `None`, writes
/// and clears succeed without effect, so every request goes out
/// unauthenticated instead of failing.
pub struct NullSessionStore;

impl NullSessionStore {
    pub fn new() -> Self {
        debug!("Using NullSessionStore (session storage unavailable)");
        Self
    }
}

impl Default for NullSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for NullSessionStore {
    fn get(&self) -> Option<String> {
        None
    }

    fn set(&self, _token: &str) -> Result<(), ClientError> {
        debug!("Discarding session token: storage unavailable");
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        Ok(())
    }
}
