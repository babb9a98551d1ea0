//! DTO for the link update endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Request body for `PUT /api/url/{short_code}`.
///
/// # `expires_at` semantics
///
/// - **`None`** (field omitted) → leave existing expiry unchanged
/// - **`Some(None)`** (`null`) → clear expiry (link never expires)
/// - **`Some(Some(t))`** → set new expiry
///
/// `title` follows the same rule with `Some("")` clearing a previous title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateUrlRequest {
    pub original_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub expires_at: Option<Option<DateTime<Utc>>>,
}
