//! Error types surfaced by the client, forms and controllers.

use std::fmt;

use thiserror::Error;
use validator::ValidationErrors;

/// Message used when a failed request carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Operation failed";

/// A single field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field-level validation failures collected from a form.
///
/// Ordered by field name so output is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns true if any message was recorded for `field`.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// First message, used for toast-level reporting.
    pub fn first_message(&self) -> Option<&str> {
        self.0.first().map(|e| e.message.as_str())
    }

    /// Merges another set of errors and restores field ordering.
    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
        self.0.sort_by(|a, b| a.field.cmp(&b.field));
    }

    /// Converts into a `Result`, `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();

        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self(fields)
    }
}

/// Errors produced by the shortener client and the controllers built on it.
///
/// # Variants
///
/// - `Validation` - client-side checks failed, nothing was sent
/// - `Request` - network failure or a non-success response from the service
/// - `Auth` - the service rejected the bearer token (401/403)
/// - `Session` - the session token could not be written or cleared
/// - `Prompt` - terminal interaction failed
/// - `Clipboard` - the system clipboard could not be opened or written
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(FieldErrors),

    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Request {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("{}", .message.as_deref().unwrap_or("Unauthorized"))]
    Auth {
        status: u16,
        message: Option<String>,
    },

    #[error("session storage error: {0}")]
    Session(String),

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl ClientError {
    pub fn request(status: Option<u16>, message: Option<String>) -> Self {
        Self::Request { status, message }
    }

    pub fn session(err: impl fmt::Display) -> Self {
        Self::Session(err.to_string())
    }

    pub fn clipboard(err: impl fmt::Display) -> Self {
        Self::Clipboard(err.to_string())
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status, .. } => *status,
            ClientError::Auth { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for a notice, preferring what the server said.
    ///
    /// Request and auth failures without a server message fall back to
    /// `fallback`; validation failures report their first field message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Request { message, .. } | ClientError::Auth { message, .. } => {
                message.clone().unwrap_or_else(|| fallback.to_string())
            }
            ClientError::Validation(errors) => errors
                .first_message()
                .unwrap_or(fallback)
                .to_string(),
            other => other.to_string(),
        }
    }
}

impl From<FieldErrors> for ClientError {
    fn from(errors: FieldErrors) -> Self {
        ClientError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_without_message_uses_generic_text() {
        let err = ClientError::request(Some(500), None);
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_request_error_prefers_server_message() {
        let err = ClientError::request(Some(409), Some("Custom alias already taken".into()));
        assert_eq!(err.to_string(), "Custom alias already taken");
        assert_eq!(
            err.user_message("Failed to save"),
            "Custom alias already taken"
        );
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ClientError::Auth {
            status: 401,
            message: None,
        };
        assert_eq!(
            err.user_message("Invalid email or password"),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_field_errors_display_and_first_message() {
        let mut errors = FieldErrors::new();
        errors.push("original_url", "Original URL is required");
        errors.push("custom_alias", "Must be 3-30 characters");

        assert!(errors.has("custom_alias"));
        assert!(!errors.has("title"));
        assert_eq!(errors.first_message(), Some("Original URL is required"));
        assert_eq!(
            errors.to_string(),
            "original_url: Original URL is required; custom_alias: Must be 3-30 characters"
        );
    }

    #[test]
    fn test_field_errors_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.push("email", "Email is required");
        assert!(errors.into_result().is_err());
    }
}
