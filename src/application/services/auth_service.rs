//! Login, signup and logout against the shortener service.

use std::sync::Arc;

use crate::application::forms::{LoginForm, SignupForm};
use crate::application::routes::Route;
use crate::domain::gateways::{AuthApi, SessionStore};
use crate::error::ClientError;
use tracing::info;

/// Fallback shown when a login fails without a server message.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";

/// Account flows and the session token lifecycle.
///
/// The token returned by a successful login is written to the session store;
/// logout removes it. Nothing is refreshed or retried automatically.
pub struct AuthService<A: AuthApi> {
    api: Arc<A>,
    session: Arc<dyn SessionStore>,
}

impl<A: AuthApi> AuthService<A> {
    pub fn new(api: Arc<A>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// Validates `form`, logs in and stores the token.
    ///
    /// Returns the route to show next ([`Route::Dashboard`]).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if the form is invalid; nothing is sent
    /// - [`ClientError::Auth`] / [`ClientError::Request`] if the service
    ///   rejects the credentials
    /// - [`ClientError::Session`] if the token cannot be stored
    pub async fn login(&self, form: &LoginForm) -> Result<Route, ClientError> {
        form.check()?;

        let response = self.api.login(form.to_request()).await?;
        if response.token.is_empty() {
            return Err(ClientError::request(
                None,
                Some("Login response did not include a token".to_string()),
            ));
        }

        self.session.set(&response.token)?;
        info!("Logged in");
        Ok(Route::Dashboard)
    }

    /// Validates `form` and registers a new account.
    ///
    /// Registration issues no token; the returned [`Route::Dashboard`] is
    /// still subject to the route guard.
    pub async fn register(&self, form: &SignupForm) -> Result<Route, ClientError> {
        form.check()?;

        self.api.register(form.to_request()).await?;
        info!("Account registered");
        Ok(Route::Dashboard)
    }

    /// Removes the stored token and returns the entry route.
    pub fn logout(&self) -> Result<Route, ClientError> {
        self.session.clear()?;
        info!("Logged out");
        Ok(Route::Landing)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}
