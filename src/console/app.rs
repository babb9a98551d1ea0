//! Route loop for the interactive console.

use std::sync::Arc;

use crate::application::interaction::Notifier;
use crate::application::routes::{Route, RouteGuard};
use crate::application::services::AuthService;
use crate::console::dashboard::{Dashboard, DashboardExit};
use crate::console::{auth, prompts};
use crate::domain::gateways::{AuthApi, SessionStore, ShortenerApi};
use crate::error::ClientError;
use crate::utils::ShortUrlBuilder;
use colored::*;
use tracing::debug;

const LANDING_ACTIONS: [&str; 3] = ["Log in", "Sign up", "Quit"];

/// Everything the console needs to move between screens.
pub struct ConsoleApp<A: ShortenerApi + AuthApi> {
    api: Arc<A>,
    auth: AuthService<A>,
    guard: RouteGuard,
    notifier: Arc<dyn Notifier>,
    session: Arc<dyn SessionStore>,
    short_urls: ShortUrlBuilder,
}

impl<A: ShortenerApi + AuthApi> ConsoleApp<A> {
    pub fn new(
        api: Arc<A>,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        short_urls: ShortUrlBuilder,
    ) -> Self {
        Self {
            auth: AuthService::new(api.clone(), session.clone()),
            guard: RouteGuard::new(session.clone()),
            api,
            notifier,
            session,
            short_urls,
        }
    }

    /// Shows `start` (after the guard) and follows navigation until the
    /// user quits.
    pub async fn run(&self, start: Route) -> Result<(), ClientError> {
        let mut route = start;

        loop {
            route = self.guard.resolve(route);
            debug!(path = route.path(), "Navigating");

            route = match route {
                Route::Landing => match self.landing()? {
                    Some(next) => next,
                    None => return Ok(()),
                },
                Route::Login => auth::login(&self.auth, &*self.notifier, None)
                    .await?
                    .unwrap_or(Route::Landing),
                Route::Signup => auth::signup(&self.auth, &*self.notifier)
                    .await?
                    .unwrap_or(Route::Landing),
                Route::Dashboard => {
                    let mut dashboard = Dashboard::new(
                        self.api.clone(),
                        self.notifier.clone(),
                        self.session.clone(),
                        self.short_urls.clone(),
                    );
                    match dashboard.run().await? {
                        DashboardExit::Route(next) => next,
                        DashboardExit::Quit => return Ok(()),
                    }
                }
            };
        }
    }

    fn landing(&self) -> Result<Option<Route>, ClientError> {
        println!();
        println!("{}", "🔗 Shortlink".bright_blue().bold());
        println!("{}", "  Shorten, track and manage your links".bright_black());
        println!();

        Ok(match prompts::choose("Welcome", &LANDING_ACTIONS)? {
            0 => Some(Route::Login),
            1 => Some(Route::Signup),
            _ => None,
        })
    }
}
