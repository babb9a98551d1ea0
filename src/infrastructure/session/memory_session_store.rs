//! Session store that lives for the current process only.

use std::sync::RwLock;

use crate::domain::gateways::SessionStore;
use crate::error::ClientError;

/// Keeps the token in memory.
///
/// Used by `--no-persist` console sessions and by tests.
#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) -> Result<(), ClientError> {
        let mut guard = self.token.write().map_err(ClientError::session)?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut guard = self.token.write().map_err(ClientError::session)?;
        *guard = None;
        Ok(())
    }
}
