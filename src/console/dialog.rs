//! Interactive runner for the add/edit dialog.

use crate::application::controllers::{DialogResult, RecordDialog};
use crate::application::forms::FormMode;
use crate::application::interaction::Notifier;
use crate::console::prompts;
use crate::domain::gateways::ShortenerApi;
use crate::error::ClientError;
use colored::*;

const ACTIONS: [&str; 3] = ["Submit", "Edit again", "Cancel"];

/// Runs `dialog` until it closes and returns how it closed.
///
/// Failed submits keep the dialog open with the entered values so the user
/// can correct them.
pub async fn run_record_dialog<A: ShortenerApi + ?Sized>(
    mut dialog: RecordDialog,
    api: &A,
    notifier: &dyn Notifier,
) -> Result<DialogResult, ClientError> {
    match dialog.mode() {
        FormMode::Add => println!("{}", "➕ Shorten URL".bright_blue().bold()),
        FormMode::Edit => println!("{}", "✏️  Edit URL".bright_blue().bold()),
    }
    if let Some(code) = dialog.short_code() {
        println!("  Short code: {} {}", code.bright_yellow(), "(cannot be changed)".bright_black());
    }
    println!();

    fill_form(&mut dialog)?;

    loop {
        match prompts::choose("Save changes?", &ACTIONS)? {
            0 => {
                if let Some(result) = dialog.submit(api, notifier).await {
                    return Ok(result);
                }
            }
            1 => fill_form(&mut dialog)?,
            _ => {
                if let Some(result) = dialog.cancel() {
                    return Ok(result);
                }
            }
        }
    }
}

fn fill_form(dialog: &mut RecordDialog) -> Result<(), ClientError> {
    let alias_editable = dialog.alias_editable();
    let Some(form) = dialog.form_mut() else {
        return Ok(());
    };

    form.original_url = prompts::text("Original URL", &form.original_url, true)?;
    if alias_editable {
        form.custom_alias = prompts::text("Custom alias (optional)", &form.custom_alias, true)?;
    }
    form.title = prompts::text("Title (optional)", &form.title, true)?;
    form.expiry_date = prompts::expiry(form.expiry_date)?;

    Ok(())
}
