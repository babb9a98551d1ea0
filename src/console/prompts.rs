//! Terminal prompts built on `dialoguer`.

use crate::error::ClientError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use dialoguer::{Confirm, Input, Password, Select};
use tracing::warn;

/// Hint shown next to the expiry prompt.
pub const EXPIRY_HINT: &str = "YYYY-MM-DD, RFC 3339, or empty for never";

pub(crate) fn prompt_error(err: dialoguer::Error) -> ClientError {
    ClientError::Prompt(err.to_string())
}

/// Parses user input for an expiry date.
///
/// - empty, `none` or `never` - no expiry
/// - `YYYY-MM-DD` - end of that day (UTC)
/// - RFC 3339 timestamp - converted to UTC
pub fn parse_expiry(input: &str) -> Result<Option<DateTime<Utc>>, String> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("none") || input.eq_ignore_ascii_case("never")
    {
        return Ok(None);
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(Some(at.with_timezone(&Utc)));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default();
        return Ok(Some(date.and_time(end_of_day).and_utc()));
    }

    Err(format!("Invalid date '{}'. Use {}", input, EXPIRY_HINT))
}

/// Formats an expiry for use as the initial prompt text.
///
/// Sub-second precision is kept so accepting the text unchanged parses back
/// to the same instant.
pub fn expiry_input(expires_at: Option<DateTime<Utc>>) -> String {
    expires_at
        .map(|at| at.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
        .unwrap_or_default()
}

/// Text prompt pre-filled with `initial`.
pub fn text(prompt: &str, initial: &str, allow_empty: bool) -> Result<String, ClientError> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(prompt_error)?;
    Ok(value.trim().to_string())
}

/// Hidden input.
pub fn secret(prompt: &str) -> Result<String, ClientError> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(prompt_error)
}

/// Prompts until the input parses as an expiry.
pub fn expiry(initial: Option<DateTime<Utc>>) -> Result<Option<DateTime<Utc>>, ClientError> {
    let value = Input::<String>::new()
        .with_prompt(format!("Expires ({})", EXPIRY_HINT))
        .with_initial_text(expiry_input(initial))
        .allow_empty(true)
        .validate_with(|input: &String| parse_expiry(input).map(|_| ()))
        .interact_text()
        .map_err(prompt_error)?;

    parse_expiry(&value).map_err(ClientError::Prompt)
}

/// Yes/no question.
pub fn yes_no(prompt: &str, default: bool) -> Result<bool, ClientError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(prompt_error)
}

/// Menu selection; returns the chosen index.
pub fn choose(prompt: &str, items: &[&str]) -> Result<usize, ClientError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(prompt_error)
}

/// Like [`choose`], but `Esc` returns `None`.
pub fn choose_opt(prompt: &str, items: &[String]) -> Result<Option<usize>, ClientError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)
}

/// Terminal confirmation for destructive actions; defaults to "no".
///
/// A failed prompt counts as a refusal.
pub fn confirm_in_terminal(prompt: &str) -> bool {
    match yes_no(prompt, false) {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Confirmation prompt failed: {}", e);
            false
        }
    }
}
