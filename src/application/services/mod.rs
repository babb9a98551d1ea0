//! Application services.

pub mod auth_service;

pub use auth_service::{AuthService, LOGIN_FAILED_MESSAGE};
