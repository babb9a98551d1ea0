//! Add/edit dialog controller.

use crate::api::dto::{CreateUrlRequest, UpdateUrlRequest};
use crate::application::forms::{FormMode, RecordForm};
use crate::application::interaction::Notifier;
use crate::domain::entities::UrlRecord;
use crate::domain::gateways::ShortenerApi;
use crate::error::{ClientError, FieldErrors};
use thiserror::Error;
use tracing::{debug, info};

/// Result reported to whoever opened the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Success,
    Cancelled,
}

/// Lifecycle of one dialog instance.
///
/// ```text
/// opened -> Editing -> Submitting -> Closed(Success)
///              ^           |
///              +-- failure-+
/// Editing -> Closed(Cancelled)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Editing,
    Submitting,
    Closed(DialogResult),
}

/// Reasons a submit was not dispatched.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("a submit is already in flight")]
    SubmitInFlight,

    #[error("the dialog is closed")]
    Closed,

    #[error("{0}")]
    Invalid(FieldErrors),
}

/// A validated request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingSubmit {
    Create(CreateUrlRequest),
    Update {
        short_code: String,
        payload: UpdateUrlRequest,
    },
}

impl PendingSubmit {
    /// Sends the request through `api`.
    pub async fn dispatch<A: ShortenerApi + ?Sized>(self, api: &A) -> Result<(), ClientError> {
        match self {
            PendingSubmit::Create(payload) => api.create_record(payload).await.map(|_| ()),
            PendingSubmit::Update {
                short_code,
                payload,
            } => api.update_record(&short_code, payload).await.map(|_| ()),
        }
    }
}

/// Drives the record form in add or edit mode.
///
/// The mode is fixed when the dialog is opened. In edit mode the short code
/// is shown but cannot be changed. At most one submit is outstanding: while
/// [`DialogState::Submitting`], the form is read-only and further submits
/// are refused.
#[derive(Debug, Clone)]
pub struct RecordDialog {
    mode: FormMode,
    short_code: Option<String>,
    initial: RecordForm,
    form: RecordForm,
    state: DialogState,
    last_error: Option<String>,
}

impl RecordDialog {
    /// Opens an empty dialog that creates a record.
    pub fn open_add() -> Self {
        Self {
            mode: FormMode::Add,
            short_code: None,
            initial: RecordForm::empty(),
            form: RecordForm::empty(),
            state: DialogState::Editing,
            last_error: None,
        }
    }

    /// Opens a dialog pre-filled from `record` that updates it.
    pub fn open_edit(record: &UrlRecord) -> Self {
        let form = RecordForm::from_record(record);
        Self {
            mode: FormMode::Edit,
            short_code: Some(record.short_code.clone()),
            initial: form.clone(),
            form,
            state: DialogState::Editing,
            last_error: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Short code of the record being edited.
    pub fn short_code(&self) -> Option<&str> {
        self.short_code.as_deref()
    }

    /// The alias can only be chosen when creating.
    pub fn alias_editable(&self) -> bool {
        self.mode == FormMode::Add && self.state == DialogState::Editing
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == DialogState::Submitting
    }

    pub fn result(&self) -> Option<DialogResult> {
        match self.state {
            DialogState::Closed(result) => Some(result),
            _ => None,
        }
    }

    /// Message of the last failed submit, cleared on the next attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    /// Mutable access to the draft, only while editing.
    ///
    /// In edit mode the alias is restored from the short code before every
    /// submit, so changes to it have no effect.
    pub fn form_mut(&mut self) -> Option<&mut RecordForm> {
        match self.state {
            DialogState::Editing => Some(&mut self.form),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.form.validate(self.mode)
    }

    /// Closes the dialog without submitting.
    ///
    /// Returns `None` while a submit is in flight; the dialog stays open.
    pub fn cancel(&mut self) -> Option<DialogResult> {
        match self.state {
            DialogState::Editing => {
                self.state = DialogState::Closed(DialogResult::Cancelled);
                Some(DialogResult::Cancelled)
            }
            DialogState::Submitting => None,
            DialogState::Closed(result) => Some(result),
        }
    }

    /// Validates the form and moves to [`DialogState::Submitting`].
    ///
    /// # Errors
    ///
    /// - [`DialogError::SubmitInFlight`] if a submit is outstanding
    /// - [`DialogError::Closed`] if the dialog already closed
    /// - [`DialogError::Invalid`] if validation fails; the dialog stays in
    ///   [`DialogState::Editing`] and nothing is sent
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, DialogError> {
        match self.state {
            DialogState::Submitting => return Err(DialogError::SubmitInFlight),
            DialogState::Closed(_) => return Err(DialogError::Closed),
            DialogState::Editing => {}
        }

        if let Some(code) = &self.short_code {
            self.form.custom_alias = code.clone();
        }

        self.validate().map_err(DialogError::Invalid)?;

        let pending = match &self.short_code {
            None => PendingSubmit::Create(self.form.create_payload()),
            Some(code) => PendingSubmit::Update {
                short_code: code.clone(),
                payload: self.form.update_payload(&self.initial),
            },
        };

        self.last_error = None;
        self.state = DialogState::Submitting;
        Ok(pending)
    }

    /// Applies the outcome of a dispatched submit.
    ///
    /// Success closes the dialog; failure returns it to editing with the
    /// error message kept in [`RecordDialog::last_error`].
    pub fn finish_submit(&mut self, outcome: Result<(), ClientError>) -> Option<DialogResult> {
        if self.state != DialogState::Submitting {
            debug!(state = ?self.state, "Ignoring submit outcome outside of submitting state");
            return self.result();
        }

        match outcome {
            Ok(()) => {
                self.state = DialogState::Closed(DialogResult::Success);
                Some(DialogResult::Success)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.state = DialogState::Editing;
                None
            }
        }
    }

    /// Validates, sends and applies the result in one step.
    ///
    /// Returns `Some(DialogResult::Success)` when the dialog closed, `None`
    /// when it stays open (invalid input or a failed request). Every outcome
    /// is reported through `notifier`.
    pub async fn submit<A: ShortenerApi + ?Sized>(
        &mut self,
        api: &A,
        notifier: &dyn Notifier,
    ) -> Option<DialogResult> {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(DialogError::Invalid(errors)) => {
                notifier.error(errors.first_message().unwrap_or("Please fix the form"));
                return None;
            }
            Err(e) => {
                debug!("Submit refused: {}", e);
                return self.result();
            }
        };

        let outcome = pending.dispatch(api).await;
        let succeeded = outcome.is_ok();
        let result = self.finish_submit(outcome);

        if succeeded {
            let message = match self.mode {
                FormMode::Add => "URL shortened!",
                FormMode::Edit => "URL updated!",
            };
            info!(mode = ?self.mode, short_code = self.short_code.as_deref().unwrap_or(""), "{}", message);
            notifier.success(message);
        } else if let Some(message) = &self.last_error {
            notifier.error(message);
        }

        result
    }
}
