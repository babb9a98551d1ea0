//! Seams for user-facing feedback and confirmation.
//!
//! Controllers never print; they report through a [`Notifier`] and ask for
//! consent through a [`Confirmation`]. Copies go through a
//! [`ClipboardWriter`]. The console provides terminal
//! implementations, tests use [`RecordingNotifier`] and closures.

use std::sync::Mutex;

use crate::error::ClientError;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A short, non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Receives notices raised by controllers.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn info(&self, message: &str) {
        self.notify(Notice::new(NoticeLevel::Info, message));
    }

    fn success(&self, message: &str) {
        self.notify(Notice::new(NoticeLevel::Success, message));
    }

    fn error(&self, message: &str) {
        self.notify(Notice::new(NoticeLevel::Error, message));
    }
}

/// Asks the user to approve a destructive action.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Destination for copied text.
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClientError>;
}

impl<F> ClipboardWriter for F
where
    F: FnMut(&str) -> Result<(), ClientError>,
{
    fn set_text(&mut self, text: &str) -> Result<(), ClientError> {
        self(text)
    }
}

/// Notifier that keeps every notice in memory.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices().pop()
    }

    /// Returns true if an error notice was raised.
    pub fn has_error(&self) -> bool {
        self.notices()
            .iter()
            .any(|n| n.level == NoticeLevel::Error)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
