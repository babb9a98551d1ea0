//! reqwest-backed client for the shortener service.

use std::sync::Arc;

use crate::api::dto::{
    CreateUrlRequest, CreateUrlResponse, ErrorBody, LoginRequest, LoginResponse,
    RegisterRequest, StatusResponse, UpdateUrlRequest,
};
use crate::domain::entities::{RecordStats, UrlRecord};
use crate::domain::gateways::{AuthApi, SessionStore, ShortenerApi};
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// HTTP client for every endpoint of the shortener service.
///
/// All paths are resolved against a fixed base URL. The session store is read
/// before each request; when it holds a token the request carries
/// `Authorization: Bearer <token>`, otherwise it is sent unauthenticated and
/// the service decides whether to reject it.
///
/// No retries and no client-side deadline: a request runs to completion or
/// failure.
pub struct HttpApiClient {
    http: Client,
    base_url: Url,
    session: Arc<dyn SessionStore>,
}

impl HttpApiClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] if `base_url` cannot carry a path
    /// (e.g. `mailto:`) or the underlying HTTP client cannot be built.
    pub fn new(base_url: Url, session: Arc<dyn SessionStore>) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::request(
                None,
                Some(format!("Invalid API base URL: {}", base_url)),
            ));
        }

        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                ClientError::request(None, Some(format!("Failed to build HTTP client: {}", e)))
            })?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let builder = self.http.request(method, self.endpoint(segments));
        match self.session.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and returns the body of a successful response.
    ///
    /// Non-success responses become [`ClientError::Auth`] (401/403) or
    /// [`ClientError::Request`], carrying the server's message when the body
    /// has one.
    async fn execute(&self, builder: RequestBuilder) -> Result<String, ClientError> {
        let request = builder
            .build()
            .map_err(|e| ClientError::request(None, Some(format!("Invalid request: {}", e))))?;

        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(%method, %path, "Request failed: {}", e);
            ClientError::request(None, None)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(%method, %path, "Failed to read response body: {}", e);
            ClientError::request(Some(status.as_u16()), None)
        })?;

        debug!(%method, %path, status = status.as_u16(), "Response received");

        if status.is_success() {
            return Ok(body);
        }

        let message = ErrorBody::message_from(&body);
        warn!(
            %method,
            %path,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "Request rejected"
        );

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(ClientError::Auth {
                status: status.as_u16(),
                message,
            })
        } else {
            Err(ClientError::request(Some(status.as_u16()), message))
        }
    }

    /// Decodes a body that must match `T`.
    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
        serde_json::from_str(body).map_err(|e| {
            warn!("Unexpected response body: {}", e);
            ClientError::request(None, Some("Unexpected response from server".to_string()))
        })
    }

    /// Decodes a body whose content is informational only.
    fn decode_or_default<T: DeserializeOwned + Default>(body: &str) -> T {
        if body.trim().is_empty() {
            return T::default();
        }
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[async_trait]
impl ShortenerApi for HttpApiClient {
    async fn list_records(&self) -> Result<Vec<UrlRecord>, ClientError> {
        let body = self
            .execute(self.request(Method::GET, &["api", "urls"]))
            .await?;

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        // The service encodes an empty collection as `null`.
        let records: Option<Vec<UrlRecord>> = Self::decode(&body)?;
        Ok(records.unwrap_or_default())
    }

    async fn create_record(
        &self,
        payload: CreateUrlRequest,
    ) -> Result<CreateUrlResponse, ClientError> {
        let body = self
            .execute(self.request(Method::POST, &["api", "add-url"]).json(&payload))
            .await?;
        Ok(Self::decode_or_default(&body))
    }

    async fn update_record(
        &self,
        short_code: &str,
        payload: UpdateUrlRequest,
    ) -> Result<StatusResponse, ClientError> {
        let body = self
            .execute(
                self.request(Method::PUT, &["api", "url", short_code])
                    .json(&payload),
            )
            .await?;
        Ok(Self::decode_or_default(&body))
    }

    async fn delete_record(&self, short_code: &str) -> Result<StatusResponse, ClientError> {
        let body = self
            .execute(self.request(Method::DELETE, &["api", "url", short_code]))
            .await?;
        Ok(Self::decode_or_default(&body))
    }

    async fn record_stats(&self, short_code: &str) -> Result<RecordStats, ClientError> {
        let body = self
            .execute(self.request(Method::GET, &["api", "stats", short_code]))
            .await?;
        Self::decode(&body)
    }
}

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn login(&self, payload: LoginRequest) -> Result<LoginResponse, ClientError> {
        let body = self
            .execute(self.request(Method::POST, &["api", "login"]).json(&payload))
            .await?;
        Self::decode(&body)
    }

    async fn register(&self, payload: RegisterRequest) -> Result<StatusResponse, ClientError> {
        let body = self
            .execute(self.request(Method::POST, &["api", "register"]).json(&payload))
            .await?;
        Ok(Self::decode_or_default(&body))
    }
}
