//! Session token storage.
//!
//! Provides three [`SessionStore`](crate::domain::gateways::SessionStore) implementations:
//! - [`FileSessionStore`] - Token persisted in a JSON file across runs
//! - [`MemorySessionStore`] - Token kept for the current process only
//! - [`NullSessionStore`] - No storage available; never holds a token

mod file_session_store;
mod memory_session_store;
mod null_session_store;

pub use file_session_store::FileSessionStore;
pub use memory_session_store::MemorySessionStore;
pub use null_session_store::NullSessionStore;
