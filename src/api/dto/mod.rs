//! Data Transfer Objects for the shortener service's REST API.
//!
//! All DTOs use Serde for JSON serialization. Request types omit absent
//! optional fields; response types tolerate missing fields.

pub mod auth;
pub mod shorten;
pub mod status;
pub mod update_link;

pub use auth::{AccountSummary, LoginRequest, LoginResponse, RegisterRequest};
pub use shorten::{CreateUrlRequest, CreateUrlResponse};
pub use status::{ErrorBody, StatusResponse};
pub use update_link::UpdateUrlRequest;
