//! HTTP access to the shortener service.

mod http_api_client;

pub use http_api_client::HttpApiClient;
