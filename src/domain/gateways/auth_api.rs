//! Gateway trait for account endpoints.

use crate::api::dto::{LoginRequest, LoginResponse, RegisterRequest, StatusResponse};
use crate::error::ClientError;
use async_trait::async_trait;

/// Remote login and registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, payload: LoginRequest) -> Result<LoginResponse, ClientError>;

    /// Registers a new account. No token is issued.
    async fn register(&self, payload: RegisterRequest) -> Result<StatusResponse, ClientError>;
}
