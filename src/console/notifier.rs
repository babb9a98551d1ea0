//! Terminal rendering of notices.

use crate::application::interaction::{Notice, NoticeLevel, Notifier};
use colored::*;

/// Prints notices as one colored line each; errors go to stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", format!("✅ {}", notice.message).green()),
            NoticeLevel::Info => println!("{}", format!("ℹ️  {}", notice.message).bright_black()),
            NoticeLevel::Error => eprintln!("{}", format!("❌ {}", notice.message).red()),
        }
    }
}
