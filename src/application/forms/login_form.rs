//! Login form model.

use crate::api::dto::LoginRequest;
use crate::error::FieldErrors;
use validator::Validate;

/// Credentials entered on the login screen.
#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validates the form with the email trimmed.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let normalized = Self {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        normalized.validate().map_err(FieldErrors::from)
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}
