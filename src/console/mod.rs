//! Terminal front end.
//!
//! Renders controller state with `colored` and collects input with
//! `dialoguer`. All decisions live in [`crate::application`]; this module
//! only draws and prompts.
//!
//! - [`app`] - Route loop (landing, login, signup, dashboard)
//! - [`dashboard`] - Link list with add/edit/delete/stats actions
//! - [`dialog`] - Add/edit dialog prompts
//! - [`auth`] - Login and signup screens
//! - [`clipboard`] - System clipboard for copying short links
//! - [`notifier`] - Notices as colored lines
//! - [`prompts`] - Prompt helpers and expiry parsing
//! - [`render`] - Tables and detail views

pub mod app;
pub mod auth;
pub mod clipboard;
pub mod dashboard;
pub mod dialog;
pub mod notifier;
pub mod prompts;
pub mod render;

pub use app::ConsoleApp;
pub use clipboard::SystemClipboard;
pub use dashboard::{Dashboard, DashboardExit};
pub use dialog::run_record_dialog;
pub use notifier::TerminalNotifier;
pub use prompts::{confirm_in_terminal, parse_expiry};
