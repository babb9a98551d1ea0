//! Signup form model.

use crate::api::dto::RegisterRequest;
use crate::error::FieldErrors;
use validator::Validate;

/// Registration details entered on the signup screen.
///
/// `confirm_password` and `agree_to_terms` are checked locally and never
/// sent to the service.
#[derive(Debug, Clone, Default, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub confirm_password: String,

    pub agree_to_terms: bool,
}

impl SignupForm {
    /// Validates field rules plus password confirmation and terms.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let normalized = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self.clone()
        };

        let mut errors = match normalized.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        let mut cross_field = FieldErrors::new();
        if self.password != self.confirm_password {
            cross_field.push("confirm_password", "Passwords do not match");
        }
        if !self.agree_to_terms {
            cross_field.push("agree_to_terms", "You must accept the terms");
        }
        errors.extend(cross_field);

        errors.into_result()
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}
