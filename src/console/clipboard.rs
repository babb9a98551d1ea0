//! System clipboard access via `arboard`.

use crate::application::interaction::ClipboardWriter;
use crate::error::ClientError;
use arboard::Clipboard;

/// Opens the system clipboard on first use and keeps it for the session.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClientError> {
        if self.inner.is_none() {
            self.inner = Some(Clipboard::new().map_err(ClientError::clipboard)?);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text).map_err(ClientError::clipboard),
            None => Err(ClientError::clipboard("not initialized")),
        }
    }
}
