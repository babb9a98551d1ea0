//! # Shortlink Console
//!
//! A terminal console and typed client for managing links on a URL
//! shortener service: log in, list your links, shorten, edit, delete and
//! inspect click counts.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as the service it talks to:
//!
//! - **Domain Layer** ([`domain`]) - Records and the gateway traits for the service and session
//! - **Application Layer** ([`application`]) - Forms, validation, controllers and navigation
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client and session storage
//! - **API Layer** ([`api`]) - Wire DTOs exchanged with the service
//! - **Console** ([`console`]) - Terminal rendering and prompts
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="http://localhost:8080"
//!
//! shortlink login --email you@example.com
//! shortlink add https://example.com/some/long/path --alias docs
//! shortlink list
//! shortlink            # interactive dashboard
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::ClientError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::controllers::{
        DeleteOutcome, DialogResult, LoadState, RecordDialog, RecordListController,
    };
    pub use crate::application::interaction::{Notice, NoticeLevel, Notifier, RecordingNotifier};
    pub use crate::application::routes::{Route, RouteGuard};
    pub use crate::application::services::AuthService;
    pub use crate::domain::entities::{RecordStats, UrlRecord};
    pub use crate::domain::gateways::{AuthApi, SessionStore, ShortenerApi};
    pub use crate::error::ClientError;
    pub use crate::infrastructure::http::HttpApiClient;
    pub use crate::infrastructure::session::{FileSessionStore, MemorySessionStore};
}
