//! Domain layer: entities and the seams the application talks through.
//!
//! - [`entities`] - Records returned by the shortener service
//! - [`gateways`] - Traits for the remote API and the session token store
//!
//! Implementations live in `crate::infrastructure`; mocks for the gateway
//! traits are generated with `mockall` under `cfg(test)`.

pub mod entities;
pub mod gateways;
