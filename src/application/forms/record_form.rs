//! Draft model behind the add/edit record dialog.

use std::sync::LazyLock;

use crate::api::dto::{CreateUrlRequest, UpdateUrlRequest};
use crate::domain::entities::UrlRecord;
use crate::error::FieldErrors;
use chrono::{DateTime, Utc};
use regex::Regex;
use validator::Validate;

/// Accepted shape of an original URL.
static ORIGINAL_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").unwrap());

/// Characters allowed in a custom alias.
static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Normalized view of the form that the validation rules run against.
///
/// Empty inputs are mapped to `None` so `required` and the optional alias
/// rules behave like the form does.
#[derive(Debug, Validate)]
struct RecordDraft {
    #[validate(required(message = "Original URL is required"))]
    #[validate(regex(
        path = "*ORIGINAL_URL_REGEX",
        message = "Must start with http:// or https://"
    ))]
    original_url: Option<String>,

    #[validate(length(min = 3, max = 30, message = "Must be 3-30 characters"))]
    #[validate(regex(
        path = "*CUSTOM_ALIAS_REGEX",
        message = "Only letters, numbers, _, - allowed"
    ))]
    custom_alias: Option<String>,
}

/// Mutable draft fields of a single record.
///
/// Validation never fails loudly: [`RecordForm::validate`] returns the
/// field messages for the dialog to show and blocks submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordForm {
    pub title: String,
    pub custom_alias: String,
    pub original_url: String,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl RecordForm {
    /// Empty form for add mode.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing record.
    ///
    /// The alias field shows the record's short code; it is not submitted.
    pub fn from_record(record: &UrlRecord) -> Self {
        Self {
            title: record.display_title().unwrap_or_default().to_string(),
            custom_alias: record.short_code.clone(),
            original_url: record.original_url.clone(),
            expiry_date: record.expires_at,
        }
    }

    /// Checks the draft against the rules for `mode`.
    ///
    /// # Rules
    ///
    /// - `original_url`: required, must match `^https?://.+`
    /// - `custom_alias` (add mode, only when filled in): 3-30 characters of
    ///   `[A-Za-z0-9_-]`
    ///
    /// # Errors
    ///
    /// Returns the collected [`FieldErrors`] when any rule is violated.
    pub fn validate(&self, mode: FormMode) -> Result<(), FieldErrors> {
        let draft = RecordDraft {
            original_url: non_empty(&self.original_url),
            custom_alias: match mode {
                FormMode::Add => non_empty(&self.custom_alias),
                FormMode::Edit => None,
            },
        };

        draft.validate().map_err(FieldErrors::from)
    }

    pub fn is_valid(&self, mode: FormMode) -> bool {
        self.validate(mode).is_ok()
    }

    /// Body for `POST /api/add-url`. Empty optional fields are omitted.
    pub fn create_payload(&self) -> CreateUrlRequest {
        CreateUrlRequest {
            original_url: self.original_url.trim().to_string(),
            custom_alias: non_empty(&self.custom_alias),
            title: non_empty(&self.title),
            expires_at: self.expiry_date,
        }
    }

    /// Body for `PUT /api/url/{short_code}`, relative to the values the
    /// dialog was opened with.
    ///
    /// A title or expiry that was present in `initial` and is now empty is
    /// sent as a clear (`""` / `null`). One that was never set is omitted,
    /// and so is an expiry equal to the initial one.
    pub fn update_payload(&self, initial: &RecordForm) -> UpdateUrlRequest {
        let title = match non_empty(&self.title) {
            Some(title) => Some(title),
            None if non_empty(&initial.title).is_some() => Some(String::new()),
            None => None,
        };

        let expires_at = match (self.expiry_date, initial.expiry_date) {
            (current, previous) if current == previous => None,
            (Some(at), _) => Some(Some(at)),
            (None, Some(_)) => Some(None),
            (None, None) => None,
        };

        UpdateUrlRequest {
            original_url: self.original_url.trim().to_string(),
            title,
            expires_at,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
