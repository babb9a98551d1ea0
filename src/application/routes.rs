//! Navigation targets and the session-based route guard.

use std::sync::Arc;

use crate::domain::gateways::SessionStore;
use tracing::debug;

/// Screens of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Entry screen, shown after logout.
    Landing,
    Signup,
    Login,
    /// Link list; needs a session.
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Signup => "/signup",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// Redirects unauthenticated users away from protected routes.
///
/// The session store is read on every route entry, so a logout takes effect
/// on the next navigation.
pub struct RouteGuard {
    session: Arc<dyn SessionStore>,
}

impl RouteGuard {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// Returns the route to show for `requested`.
    ///
    /// Protected routes resolve to [`Route::Login`] when no token is stored.
    pub fn resolve(&self, requested: Route) -> Route {
        if requested.requires_session() && !self.session.is_authenticated() {
            debug!(path = requested.path(), "No session, redirecting to login");
            return Route::Login;
        }
        requested
    }
}
