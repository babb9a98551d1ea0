//! Shortened link records as returned by the shortener service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened link owned by the current user.
///
/// `short_code` identifies the record for update and delete calls and never
/// changes after creation. `click_count` and `created_at` are maintained by
/// the service and are read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub short_code: String,
    pub original_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// `None` means the link never expires.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub click_count: u64,
}

impl UrlRecord {
    /// Creates a record with no title, expiry or clicks.
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            original_url: original_url.into(),
            title: None,
            created_at: None,
            expires_at: None,
            click_count: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Title with empty strings treated as absent.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Per-link statistics from `GET /api/stats/{short_code}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStats {
    pub short_code: String,
    pub original_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub short_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn test_record_deserializes_service_payload() {
        let record: UrlRecord = serde_json::from_value(json!({
            "id": "665f1c",
            "short_code": "abc123",
            "original_url": "https://example.com",
            "title": "Example",
            "created_at": "2025-01-15T10:30:00Z",
            "user_id": "665f00",
            "click_count": 7,
            "custom": true
        }))
        .unwrap();

        assert_eq!(record.short_code, "abc123");
        assert_eq!(record.display_title(), Some("Example"));
        assert_eq!(record.click_count, 7);
        assert!(record.expires_at.is_none());
        assert!(record.created_at.is_some());
    }

    #[test]
    fn test_record_minimal_payload_uses_defaults() {
        let record: UrlRecord = serde_json::from_value(json!({
            "short_code": "x1",
            "original_url": "https://x.com"
        }))
        .unwrap();

        assert_eq!(record, UrlRecord::new("x1", "https://x.com"));
    }

    #[test]
    fn test_empty_title_is_not_displayed() {
        let record = UrlRecord::new("x1", "https://x.com").with_title("  ");
        assert_eq!(record.display_title(), None);
    }

    #[test]
    fn test_is_expired() {
        let past = UrlRecord::new("a", "https://a.com").with_expiry(Utc::now() - Duration::seconds(1));
        let future = UrlRecord::new("b", "https://b.com").with_expiry(Utc::now() + Duration::days(1));

        assert!(past.is_expired());
        assert!(!future.is_expired());
        assert!(!UrlRecord::new("c", "https://c.com").is_expired());
    }
}
