//! Gateway trait for link management endpoints.

use crate::api::dto::{CreateUrlRequest, CreateUrlResponse, StatusResponse, UpdateUrlRequest};
use crate::domain::entities::{RecordStats, UrlRecord};
use crate::error::ClientError;
use async_trait::async_trait;

/// Remote operations on the current user's shortened links.
///
/// Every call is authenticated with the session token when one is present.
/// Records are identified by their short code.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpApiClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Fetches every record owned by the current user, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] on network or server failure and
    /// [`ClientError::Auth`] when the token is missing or rejected.
    async fn list_records(&self) -> Result<Vec<UrlRecord>, ClientError>;

    /// Creates a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] with the server's message when the
    /// custom alias is taken or the payload is rejected.
    async fn create_record(
        &self,
        payload: CreateUrlRequest,
    ) -> Result<CreateUrlResponse, ClientError>;

    /// Updates the record identified by `short_code`.
    async fn update_record(
        &self,
        short_code: &str,
        payload: UpdateUrlRequest,
    ) -> Result<StatusResponse, ClientError>;

    /// Deletes the record identified by `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] (404) when the record does not exist
    /// or is not owned by the current user.
    async fn delete_record(&self, short_code: &str) -> Result<StatusResponse, ClientError>;

    /// Fetches click statistics for one record.
    async fn record_stats(&self, short_code: &str) -> Result<RecordStats, ClientError>;
}
