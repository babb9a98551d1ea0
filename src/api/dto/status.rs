//! Status and error payloads shared by all endpoints.

use serde::Deserialize;

/// Plain acknowledgement such as `{"message": "URL deleted successfully"}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error payload of a failed request.
///
/// Accepts the shapes the service family uses:
///
/// ```text
/// {"message": "..."}
/// {"error": "..."}
/// {"error": {"code": "...", "message": "..."}}
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<ErrorField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorField {
    Text(String),
    Detailed { message: String },
}

/// Longest plain-text body accepted as an error message.
const MAX_PLAIN_TEXT_MESSAGE: usize = 300;

impl ErrorBody {
    /// Extracts the server-provided message from a raw response body.
    ///
    /// JSON bodies yield their `message` or `error` field. Short plain-text
    /// bodies are used verbatim (trimmed). Anything else yields `None`.
    pub fn message_from(body: &str) -> Option<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(trimmed) {
            let message = parsed.message.or(parsed.error.map(|e| match e {
                ErrorField::Text(text) => text,
                ErrorField::Detailed { message } => message,
            }));
            return message.filter(|m| !m.trim().is_empty());
        }

        let looks_structured = trimmed.starts_with('{')
            || trimmed.starts_with('[')
            || trimmed.starts_with('<');
        if looks_structured || trimmed.len() > MAX_PLAIN_TEXT_MESSAGE {
            return None;
        }

        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field() {
        assert_eq!(
            ErrorBody::message_from(r#"{"message": "Custom alias already taken"}"#).as_deref(),
            Some("Custom alias already taken")
        );
    }

    #[test]
    fn test_error_string_field() {
        assert_eq!(
            ErrorBody::message_from(r#"{"error": "Too Many Requests"}"#).as_deref(),
            Some("Too Many Requests")
        );
    }

    #[test]
    fn test_nested_error_object() {
        let body = r#"{"error": {"code": "not_found", "message": "Short link not found", "details": {}}}"#;
        assert_eq!(
            ErrorBody::message_from(body).as_deref(),
            Some("Short link not found")
        );
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(
            ErrorBody::message_from("URL not found or not owned by you\n").as_deref(),
            Some("URL not found or not owned by you")
        );
    }

    #[test]
    fn test_no_message() {
        assert_eq!(ErrorBody::message_from(""), None);
        assert_eq!(ErrorBody::message_from("{}"), None);
        assert_eq!(ErrorBody::message_from(r#"{"message": ""}"#), None);
        assert_eq!(ErrorBody::message_from("<html><body>502</body></html>"), None);
    }
}
