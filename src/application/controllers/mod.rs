//! Controllers behind the dashboard screens.
//!
//! - [`record_list::RecordListController`] - Loads, lists and deletes records
//! - [`record_dialog::RecordDialog`] - Add/edit form with submit state machine

pub mod record_dialog;
pub mod record_list;

pub use record_dialog::{DialogError, DialogResult, DialogState, PendingSubmit, RecordDialog};
pub use record_list::{DeleteOutcome, LOAD_FAILED_MESSAGE, LoadState, RecordListController};
