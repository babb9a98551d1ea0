//! `shortlink` - terminal console for a URL shortener service.
//!
//! # Usage
//!
//! ```bash
//! # Interactive console (landing, login, dashboard)
//! shortlink
//!
//! # Account
//! shortlink signup
//! shortlink login --email you@example.com
//! shortlink logout
//!
//! # Links
//! shortlink list
//! shortlink add https://example.com/docs --alias docs --title "Docs" --expires 2030-12-31
//! shortlink edit docs --title "Documentation" --clear-expiry
//! shortlink delete docs
//! shortlink stats docs
//! shortlink copy docs
//! ```
//!
//! # Environment Variables
//!
//! See [`shortlink_console::config`].

use shortlink_console::application::controllers::{
    DeleteOutcome, DialogResult, LoadState, RecordListController,
};
use shortlink_console::application::interaction::Notifier;
use shortlink_console::application::routes::{Route, RouteGuard};
use shortlink_console::application::services::AuthService;
use shortlink_console::config::{self, Config};
use shortlink_console::console::{self, ConsoleApp, SystemClipboard, TerminalNotifier};
use shortlink_console::domain::gateways::{SessionStore, ShortenerApi};
use shortlink_console::infrastructure::http::HttpApiClient;
use shortlink_console::infrastructure::session::{
    FileSessionStore, MemorySessionStore, NullSessionStore,
};
use shortlink_console::utils::ShortUrlBuilder;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Manage your short links from the terminal.
#[derive(Parser)]
#[command(name = "shortlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keep the session token in memory only
    #[arg(long, global = true)]
    no_persist: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Dashboard,

    /// Create an account
    Signup,

    /// Log in and store the session token
    Login {
        /// Account email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// List your links
    List,

    /// Shorten a URL
    Add {
        /// URL to shorten (http or https)
        url: String,

        /// Custom short code (3-30 letters, digits, '_' or '-')
        #[arg(short, long)]
        alias: Option<String>,

        /// Display title
        #[arg(short, long)]
        title: Option<String>,

        /// Expiry (YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        expires: Option<String>,
    },

    /// Change a link's destination, title or expiry
    Edit {
        /// Short code of the link
        short_code: String,

        /// New destination URL
        #[arg(long)]
        url: Option<String>,

        /// New title (empty string clears it)
        #[arg(short, long)]
        title: Option<String>,

        /// New expiry (YYYY-MM-DD or RFC 3339)
        #[arg(short, long, conflicts_with = "clear_expiry")]
        expires: Option<String>,

        /// Remove the expiry
        #[arg(long)]
        clear_expiry: bool,
    },

    /// Delete a link
    Delete {
        /// Short code of the link
        short_code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Copy a link's short URL to the clipboard
    Copy {
        /// Short code of the link
        short_code: String,
    },

    /// Show click statistics for a link
    Stats {
        /// Short code of the link
        short_code: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config.print_summary();

    let command = cli.command.unwrap_or(Commands::Dashboard);
    let interactive = matches!(command, Commands::Dashboard);
    let session = session_store(&config, cli.no_persist, interactive);

    let api = Arc::new(
        HttpApiClient::new(config.api_base_url.clone(), session.clone())
            .context("Failed to create API client")?,
    );
    let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier::new());
    let short_urls = ShortUrlBuilder::new(&config.short_url_base);

    let succeeded = match command {
        Commands::Dashboard => {
            let app = ConsoleApp::new(api, session, notifier, short_urls);
            app.run(Route::Dashboard).await?;
            true
        }
        Commands::Signup => {
            let auth = AuthService::new(api, session);
            console::auth::signup(&auth, &*notifier).await?.is_some()
        }
        Commands::Login { email } => {
            let auth = AuthService::new(api, session);
            console::auth::login(&auth, &*notifier, email).await?.is_some()
        }
        Commands::Logout => {
            let auth = AuthService::new(api, session);
            auth.logout().context("Failed to clear the stored session")?;
            notifier.success("Logged out successfully");
            true
        }
        Commands::List => {
            require_session(&session)?;
            let mut list = RecordListController::new(api, notifier);
            let loaded = *list.load().await == LoadState::Ready;
            if loaded {
                console::render::print_records(list.records(), &short_urls);
            }
            loaded
        }
        Commands::Add {
            url,
            alias,
            title,
            expires,
        } => {
            require_session(&session)?;
            let mut list = RecordListController::new(api.clone(), notifier.clone());
            let mut dialog = list.open_add();
            if let Some(form) = dialog.form_mut() {
                form.original_url = url;
                form.custom_alias = alias.unwrap_or_default();
                form.title = title.unwrap_or_default();
                form.expiry_date = parse_expiry_arg(expires.as_deref())?;
            }

            let result = dialog.submit(&*api, &*notifier).await;
            if result == Some(DialogResult::Success) {
                list.on_dialog_closed(DialogResult::Success).await;
                console::render::print_records(list.records(), &short_urls);
                true
            } else {
                false
            }
        }
        Commands::Edit {
            short_code,
            url,
            title,
            expires,
            clear_expiry,
        } => {
            require_session(&session)?;
            let mut list = RecordListController::new(api.clone(), notifier.clone());
            if *list.load().await != LoadState::Ready {
                return Ok(ExitCode::FAILURE);
            }
            let Some(record) = list.find(&short_code).cloned() else {
                notifier.error(&format!("No link with short code '{}'", short_code));
                return Ok(ExitCode::FAILURE);
            };

            let mut dialog = list.open_edit(&record);
            if let Some(form) = dialog.form_mut() {
                if let Some(url) = url {
                    form.original_url = url;
                }
                if let Some(title) = title {
                    form.title = title;
                }
                if clear_expiry {
                    form.expiry_date = None;
                } else if expires.is_some() {
                    form.expiry_date = parse_expiry_arg(expires.as_deref())?;
                }
            }

            dialog.submit(&*api, &*notifier).await == Some(DialogResult::Success)
        }
        Commands::Delete { short_code, yes } => {
            require_session(&session)?;
            let mut list = RecordListController::new(api, notifier);
            let outcome = if yes {
                list.delete(&short_code, &|_: &str| true).await
            } else {
                list.delete(&short_code, &console::confirm_in_terminal).await
            };
            outcome != DeleteOutcome::Failed
        }
        Commands::Copy { short_code } => {
            require_session(&session)?;
            let mut list = RecordListController::new(api, notifier);
            if *list.load().await != LoadState::Ready {
                return Ok(ExitCode::FAILURE);
            }
            let mut clipboard = SystemClipboard::new();
            match list.copy_short_url(&short_code, &short_urls, &mut clipboard) {
                Some(link) => {
                    println!("{}", link.bright_yellow());
                    true
                }
                None => false,
            }
        }
        Commands::Stats { short_code } => {
            require_session(&session)?;
            match api.record_stats(&short_code).await {
                Ok(stats) => {
                    console::render::print_stats(&stats, &short_urls);
                    true
                }
                Err(e) => {
                    notifier.error(&e.user_message("Failed to load stats"));
                    false
                }
            }
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initializes the tracing subscriber on stderr.
///
/// `RUST_LOG` wins over the configured level when both are set.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Picks the session store for this run.
///
/// Without a session file the interactive console keeps the token in
/// memory; one-shot commands get no storage at all.
fn session_store(config: &Config, no_persist: bool, interactive: bool) -> Arc<dyn SessionStore> {
    if no_persist {
        return Arc::new(MemorySessionStore::new());
    }

    match &config.session_file {
        Some(path) => Arc::new(FileSessionStore::new(path.clone())),
        None if interactive => Arc::new(MemorySessionStore::new()),
        None => {
            tracing::warn!("No session storage available; the session will not be kept");
            Arc::new(NullSessionStore::new())
        }
    }
}

fn require_session(session: &Arc<dyn SessionStore>) -> Result<()> {
    let guard = RouteGuard::new(session.clone());
    if guard.resolve(Route::Dashboard) == Route::Login {
        anyhow::bail!(
            "{}",
            "Not logged in. Run `shortlink login` first.".yellow()
        );
    }
    Ok(())
}

fn parse_expiry_arg(value: Option<&str>) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
    match value {
        Some(value) => console::parse_expiry(value).map_err(anyhow::Error::msg),
        None => Ok(None),
    }
}
