//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/add-url`.
///
/// Optional fields are omitted from the JSON when absent, so an empty custom
/// alias lets the service assign the short code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateUrlRequest {
    pub original_url: String,

    /// Requested short code. Absent = server-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response of `POST /api/add-url`.
///
/// Every field is optional: the service may answer with the created record
/// or with a bare status message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateUrlResponse {
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: Option<String>,
}
