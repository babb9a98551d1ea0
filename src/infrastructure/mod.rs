//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest client for the shortener REST API
//! - [`session`] - Session token storage (file, memory and no-op implementations)

pub mod http;
pub mod session;
