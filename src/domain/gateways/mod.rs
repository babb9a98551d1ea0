//! Gateway traits between the application layer and the outside world.
//!
//! - [`ShortenerApi`] - Link CRUD and statistics
//! - [`AuthApi`] - Login and registration
//! - [`SessionStore`] - Bearer token storage

pub mod auth_api;
pub mod session_store;
pub mod shortener_api;

pub use auth_api::AuthApi;
pub use session_store::SessionStore;
pub use shortener_api::ShortenerApi;

#[cfg(test)]
pub use auth_api::MockAuthApi;
#[cfg(test)]
pub use session_store::MockSessionStore;
#[cfg(test)]
pub use shortener_api::MockShortenerApi;
