//! List view controller for the current user's links.

use std::sync::Arc;

use crate::application::controllers::record_dialog::{DialogResult, RecordDialog};
use crate::application::interaction::{ClipboardWriter, Confirmation, Notifier};
use crate::application::routes::Route;
use crate::domain::entities::UrlRecord;
use crate::domain::gateways::{SessionStore, ShortenerApi};
use crate::utils::ShortUrlBuilder;
use tracing::{info, warn};

/// Message shown when the list cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load URLs";

/// Loading status of the record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    Loading,
    Ready,
    /// Last load failed; the user may retry. Previously loaded records stay.
    Failed(String),
}

/// Outcome of a delete action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    Deleted,
    Failed,
}

/// Owns the in-memory list of records and applies mutations to it.
///
/// # Consistency
///
/// The service's list is authoritative. After a dialog reports success the
/// whole list is reloaded; a successful delete removes the record locally
/// without a reload. Whatever completes last overwrites local state.
pub struct RecordListController<A: ShortenerApi> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    records: Vec<UrlRecord>,
    load_state: LoadState,
}

impl<A: ShortenerApi> RecordListController<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            records: Vec::new(),
            load_state: LoadState::Idle,
        }
    }

    pub fn records(&self) -> &[UrlRecord] {
        &self.records
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn find(&self, short_code: &str) -> Option<&UrlRecord> {
        self.records.iter().find(|r| r.short_code == short_code)
    }

    /// Fetches the full collection and replaces local state.
    ///
    /// On failure the state becomes [`LoadState::Failed`] and the records from
    /// the previous successful load are kept.
    pub async fn load(&mut self) -> &LoadState {
        self.load_state = LoadState::Loading;

        match self.api.list_records().await {
            Ok(records) => {
                info!(count = records.len(), "Records loaded");
                self.records = records;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                warn!("Failed to load records: {}", e);
                self.load_state = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
                self.notifier.error(LOAD_FAILED_MESSAGE);
            }
        }

        &self.load_state
    }

    /// Dialog for creating a record.
    pub fn open_add(&self) -> RecordDialog {
        RecordDialog::open_add()
    }

    /// Dialog for editing `record`.
    pub fn open_edit(&self, record: &UrlRecord) -> RecordDialog {
        RecordDialog::open_edit(record)
    }

    /// Consumes the result of a closed dialog; success triggers a reload.
    pub async fn on_dialog_closed(&mut self, result: DialogResult) {
        if result == DialogResult::Success {
            self.load().await;
        }
    }

    /// Deletes a record after explicit confirmation.
    ///
    /// On success the record is removed from the local collection without a
    /// reload. On failure the collection is left unchanged and an error
    /// notice is raised.
    pub async fn delete(
        &mut self,
        short_code: &str,
        confirmation: &dyn Confirmation,
    ) -> DeleteOutcome {
        if !confirmation.confirm("Are you sure you want to delete this URL?") {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_record(short_code).await {
            Ok(_) => {
                self.records.retain(|r| r.short_code != short_code);
                info!(short_code, "Record deleted");
                self.notifier.success("URL deleted");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(short_code, "Failed to delete record: {}", e);
                self.notifier.error("Failed to delete");
                DeleteOutcome::Failed
            }
        }
    }

    /// Copies the public short link of a loaded record.
    ///
    /// Returns the copied link, or `None` when the record is not in the
    /// collection or the clipboard refused the text.
    pub fn copy_short_url(
        &self,
        short_code: &str,
        short_urls: &ShortUrlBuilder,
        clipboard: &mut dyn ClipboardWriter,
    ) -> Option<String> {
        if self.find(short_code).is_none() {
            self.notifier.error("Copy failed: link not found");
            return None;
        }

        let link = short_urls.build(short_code);
        match clipboard.set_text(&link) {
            Ok(()) => {
                self.notifier.success("Copied to clipboard!");
                Some(link)
            }
            Err(e) => {
                warn!(short_code, "Failed to copy short URL: {}", e);
                self.notifier.error(&format!("Copy failed: {}", e));
                None
            }
        }
    }

    /// Clears the session and returns the entry route.
    ///
    /// If the token cannot be removed the user is still logged in: local
    /// state is kept and [`Route::Dashboard`] is returned.
    pub fn logout(&mut self, session: &dyn SessionStore) -> Route {
        if let Err(e) = session.clear() {
            warn!("Failed to clear session: {}", e);
            self.notifier.error("Failed to clear the stored session");
            return Route::Dashboard;
        }

        self.notifier.success("Logged out successfully");
        self.records.clear();
        self.load_state = LoadState::Idle;
        Route::Landing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::StatusResponse;
    use crate::application::interaction::{NoticeLevel, RecordingNotifier};
    use crate::domain::gateways::{MockSessionStore, MockShortenerApi};
    use crate::error::ClientError;

    fn records() -> Vec<UrlRecord> {
        vec![
            UrlRecord::new("abc123", "https://x.com").with_title("X"),
            UrlRecord::new("def456", "https://y.com"),
        ]
    }

    fn controller(api: MockShortenerApi) -> (RecordListController<MockShortenerApi>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (
            RecordListController::new(Arc::new(api), notifier.clone()),
            notifier,
        )
    }

    async fn loaded(api: MockShortenerApi) -> (RecordListController<MockShortenerApi>, Arc<RecordingNotifier>) {
        let (mut list, notifier) = controller(api);
        list.load().await;
        (list, notifier)
    }

    #[tokio::test]
    async fn test_load_replaces_records() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records()
            .times(1)
            .returning(|| Ok(records()));

        let (list, _) = loaded(api).await;

        assert_eq!(list.load_state(), &LoadState::Ready);
        assert_eq!(list.records(), records().as_slice());
    }

    #[tokio::test]
    async fn test_reload_twice_is_idempotent() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records()
            .times(2)
            .returning(|| Ok(records()));

        let (mut list, _) = loaded(api).await;
        let first = list.records().to_vec();
        list.load().await;

        assert_eq!(list.records(), first.as_slice());
    }

    #[tokio::test]
    async fn test_load_failure_sets_error_state_and_keeps_records() {
        let mut api = MockShortenerApi::new();
        let mut calls = 0;
        api.expect_list_records().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(records())
            } else {
                Err(ClientError::request(Some(500), None))
            }
        });

        let (mut list, notifier) = loaded(api).await;
        list.load().await;

        assert_eq!(
            list.load_state(),
            &LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
        );
        assert_eq!(list.records().len(), 2);
        assert!(notifier.has_error());
    }

    #[tokio::test]
    async fn test_delete_confirmed_removes_locally_without_reload() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records()
            .times(1)
            .returning(|| Ok(records()));
        api.expect_delete_record()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(StatusResponse::default()));

        let (mut list, notifier) = loaded(api).await;
        let outcome = list.delete("abc123", &|_: &str| true).await;

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(list.find("abc123").is_none());
        assert_eq!(list.records().len(), 1);
        assert_eq!(notifier.last().unwrap().message, "URL deleted");
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records()
            .times(1)
            .returning(|| Ok(records()));
        api.expect_delete_record().times(0);

        let (mut list, _) = loaded(api).await;
        let outcome = list.delete("abc123", &|_: &str| false).await;

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(list.records().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_missing_record_leaves_list_unchanged() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records()
            .times(1)
            .returning(|| Ok(records()));
        api.expect_delete_record().times(1).returning(|_| {
            Err(ClientError::request(
                Some(404),
                Some("URL not found or not owned by you".into()),
            ))
        });

        let (mut list, notifier) = loaded(api).await;
        let outcome = list.delete("gone99", &|_: &str| true).await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert_eq!(list.records(), records().as_slice());
        let notice = notifier.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Failed to delete");
    }

    #[tokio::test]
    async fn test_dialog_success_triggers_reload() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records()
            .times(1)
            .returning(|| Ok(records()));

        let (mut list, _) = controller(api);
        list.on_dialog_closed(DialogResult::Success).await;

        assert_eq!(list.records().len(), 2);
    }

    #[tokio::test]
    async fn test_dialog_cancel_does_not_reload() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records().times(0);

        let (mut list, _) = controller(api);
        list.on_dialog_closed(DialogResult::Cancelled).await;

        assert_eq!(list.load_state(), &LoadState::Idle);
    }

    #[test]
    fn test_open_edit_uses_record() {
        let (list, _) = controller(MockShortenerApi::new());
        let record = UrlRecord::new("abc123", "https://x.com");
        let dialog = list.open_edit(&record);
        assert_eq!(dialog.short_code(), Some("abc123"));
        assert!(list.open_add().short_code().is_none());
    }

    fn short_urls() -> ShortUrlBuilder {
        ShortUrlBuilder::new(&url::Url::parse("https://sho.rt").unwrap())
    }

    #[tokio::test]
    async fn test_copy_short_url_writes_public_link() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records()
            .times(1)
            .returning(|| Ok(records()));

        let (list, notifier) = loaded(api).await;
        let mut copied = Vec::new();
        let mut clipboard = |text: &str| -> Result<(), ClientError> {
            copied.push(text.to_string());
            Ok(())
        };

        let link = list.copy_short_url("abc123", &short_urls(), &mut clipboard);

        assert_eq!(link.as_deref(), Some("https://sho.rt/abc123"));
        assert_eq!(copied, vec!["https://sho.rt/abc123".to_string()]);
        assert_eq!(notifier.last().unwrap().message, "Copied to clipboard!");
    }

    #[tokio::test]
    async fn test_copy_short_url_reports_clipboard_failure() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records()
            .times(1)
            .returning(|| Ok(records()));

        let (list, notifier) = loaded(api).await;
        let mut clipboard =
            |_: &str| -> Result<(), ClientError> { Err(ClientError::clipboard("no display")) };

        assert_eq!(list.copy_short_url("abc123", &short_urls(), &mut clipboard), None);
        let notice = notifier.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Copy failed: clipboard unavailable: no display");
    }

    #[test]
    fn test_copy_unknown_record_touches_nothing() {
        let (list, notifier) = controller(MockShortenerApi::new());
        let mut calls = 0;
        let mut clipboard = |_: &str| -> Result<(), ClientError> {
            calls += 1;
            Ok(())
        };

        assert_eq!(list.copy_short_url("gone99", &short_urls(), &mut clipboard), None);
        assert_eq!(calls, 0);
        assert!(notifier.has_error());
    }

    #[test]
    fn test_logout_clears_session_and_routes_to_entry() {
        let mut session = MockSessionStore::new();
        session.expect_clear().times(1).returning(|| Ok(()));

        let (mut list, notifier) = controller(MockShortenerApi::new());
        let route = list.logout(&session);

        assert_eq!(route, Route::Landing);
        assert!(list.records().is_empty());
        assert_eq!(notifier.last().unwrap().message, "Logged out successfully");
    }

    #[tokio::test]
    async fn test_logout_failure_keeps_session_state() {
        let mut api = MockShortenerApi::new();
        api.expect_list_records()
            .times(1)
            .returning(|| Ok(records()));

        let mut session = MockSessionStore::new();
        session
            .expect_clear()
            .times(1)
            .returning(|| Err(ClientError::session("permission denied")));

        let (mut list, notifier) = loaded(api).await;
        let route = list.logout(&session);

        assert_eq!(route, Route::Dashboard);
        assert_eq!(list.records().len(), 2);
        assert_eq!(list.load_state(), &LoadState::Ready);
        let notice = notifier.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Failed to clear the stored session");
    }
}
