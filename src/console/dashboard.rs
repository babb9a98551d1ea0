//! Interactive dashboard over the record list.

use std::sync::Arc;

use crate::application::controllers::{LoadState, RecordListController};
use crate::application::interaction::Notifier;
use crate::application::routes::Route;
use crate::console::clipboard::SystemClipboard;
use crate::console::{dialog, prompts, render};
use crate::domain::entities::UrlRecord;
use crate::domain::gateways::{SessionStore, ShortenerApi};
use crate::error::ClientError;
use crate::utils::ShortUrlBuilder;
use tracing::warn;

const ACTIONS: [&str; 8] = [
    "Reload",
    "Add URL",
    "Edit URL",
    "Delete URL",
    "Copy short URL",
    "Show stats",
    "Logout",
    "Quit",
];

/// Where the dashboard loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardExit {
    /// The user logged out; continue at the route.
    Route(Route),
    Quit,
}

pub struct Dashboard<A: ShortenerApi> {
    api: Arc<A>,
    list: RecordListController<A>,
    notifier: Arc<dyn Notifier>,
    session: Arc<dyn SessionStore>,
    short_urls: ShortUrlBuilder,
    clipboard: SystemClipboard,
}

impl<A: ShortenerApi> Dashboard<A> {
    pub fn new(
        api: Arc<A>,
        notifier: Arc<dyn Notifier>,
        session: Arc<dyn SessionStore>,
        short_urls: ShortUrlBuilder,
    ) -> Self {
        Self {
            list: RecordListController::new(api.clone(), notifier.clone()),
            api,
            notifier,
            session,
            short_urls,
            clipboard: SystemClipboard::new(),
        }
    }

    pub async fn run(&mut self) -> Result<DashboardExit, ClientError> {
        self.list.load().await;

        loop {
            self.render();

            match prompts::choose("What next?", &ACTIONS)? {
                0 => {
                    self.list.load().await;
                }
                1 => {
                    let dialog = self.list.open_add();
                    let result =
                        dialog::run_record_dialog(dialog, &*self.api, &*self.notifier).await?;
                    self.list.on_dialog_closed(result).await;
                }
                2 => {
                    if let Some(record) = self.pick("Edit which link?")? {
                        let dialog = self.list.open_edit(&record);
                        let result =
                            dialog::run_record_dialog(dialog, &*self.api, &*self.notifier)
                                .await?;
                        self.list.on_dialog_closed(result).await;
                    }
                }
                3 => {
                    if let Some(record) = self.pick("Delete which link?")? {
                        self.list
                            .delete(&record.short_code, &prompts::confirm_in_terminal)
                            .await;
                    }
                }
                4 => {
                    if let Some(record) = self.pick("Copy which link?")? {
                        self.list.copy_short_url(
                            &record.short_code,
                            &self.short_urls,
                            &mut self.clipboard,
                        );
                    }
                }
                5 => {
                    if let Some(record) = self.pick("Stats for which link?")? {
                        self.show_stats(&record.short_code).await;
                    }
                }
                6 => match self.list.logout(&*self.session) {
                    Route::Dashboard => {}
                    route => return Ok(DashboardExit::Route(route)),
                },
                _ => return Ok(DashboardExit::Quit),
            }
        }
    }

    fn render(&self) {
        println!();
        render::print_records(self.list.records(), &self.short_urls);
        if let LoadState::Failed(message) = self.list.load_state() {
            println!("  {} (choose Reload to retry)", message);
            println!();
        }
    }

    fn pick(&self, prompt: &str) -> Result<Option<UrlRecord>, ClientError> {
        let records = self.list.records();
        if records.is_empty() {
            self.notifier.info("No links yet");
            return Ok(None);
        }

        let items: Vec<String> = records
            .iter()
            .map(|r| {
                format!(
                    "{}  {}",
                    r.short_code,
                    render::truncate(r.display_title().unwrap_or(&r.original_url), 50)
                )
            })
            .collect();

        Ok(prompts::choose_opt(prompt, &items)?.map(|index| records[index].clone()))
    }

    async fn show_stats(&self, short_code: &str) {
        match self.api.record_stats(short_code).await {
            Ok(stats) => render::print_stats(&stats, &self.short_urls),
            Err(e) => {
                warn!(short_code, "Failed to load stats: {}", e);
                self.notifier.error(&e.user_message("Failed to load stats"));
            }
        }
    }
}
