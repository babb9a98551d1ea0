//! Login and signup screens.

use crate::application::forms::{LoginForm, SignupForm};
use crate::application::interaction::Notifier;
use crate::application::routes::Route;
use crate::application::services::{AuthService, LOGIN_FAILED_MESSAGE};
use crate::console::{prompts, render};
use crate::domain::gateways::AuthApi;
use crate::error::ClientError;
use colored::*;

const SIGNUP_FAILED_MESSAGE: &str = "Signup failed";

/// Prompts for credentials and logs in.
///
/// Returns the next route on success, `None` when the attempt failed and
/// was reported. Only prompt failures are returned as errors.
pub async fn login<A: AuthApi>(
    service: &AuthService<A>,
    notifier: &dyn Notifier,
    email: Option<String>,
) -> Result<Option<Route>, ClientError> {
    println!("{}", "🔐 Log in".bright_blue().bold());
    println!();

    let email = match email {
        Some(email) => email,
        None => prompts::text("Email", "", true)?,
    };
    let password = prompts::secret("Password")?;

    let form = LoginForm::new(email, password);
    match service.login(&form).await {
        Ok(route) => {
            notifier.success("Login successful!");
            Ok(Some(route))
        }
        Err(ClientError::Validation(errors)) => {
            render::print_field_errors(&errors);
            Ok(None)
        }
        Err(e @ ClientError::Prompt(_)) => Err(e),
        Err(e) => {
            notifier.error(&e.user_message(LOGIN_FAILED_MESSAGE));
            Ok(None)
        }
    }
}

/// Prompts for account details and registers.
pub async fn signup<A: AuthApi>(
    service: &AuthService<A>,
    notifier: &dyn Notifier,
) -> Result<Option<Route>, ClientError> {
    println!("{}", "📝 Sign up".bright_blue().bold());
    println!();

    let form = SignupForm {
        name: prompts::text("Name", "", true)?,
        email: prompts::text("Email", "", true)?,
        password: prompts::secret("Password (min 8 characters)")?,
        confirm_password: prompts::secret("Confirm password")?,
        agree_to_terms: prompts::yes_no("I agree to the terms", false)?,
    };

    match service.register(&form).await {
        Ok(route) => {
            notifier.success("Signup successful");
            Ok(Some(route))
        }
        Err(ClientError::Validation(errors)) => {
            render::print_field_errors(&errors);
            Ok(None)
        }
        Err(e @ ClientError::Prompt(_)) => Err(e),
        Err(e) => {
            notifier.error(&e.user_message(SIGNUP_FAILED_MESSAGE));
            Ok(None)
        }
    }
}
