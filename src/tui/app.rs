//! Application State
//!
//! Holds the search UI state: keyword input, results, loading flag and the
//! notifications shown to the user. Searches run on a spawned task and
//! report back over a channel; starting a new search aborts the previous
//! one, and a completion from a superseded search is dropped.

use crate::client::{ClientError, ProxyReply, SearchBackend};
use crate::feed::rss_link;
use crate::models::PodcastResult;
use crate::tui::clipboard::Clipboard;
use crate::tui::event::AppAction;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use tui_textarea::TextArea;

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

const INPUT_PLACEHOLDER: &str = "Podcast name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A transient message, the terminal counterpart of a toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Instant,
}

/// Current view/screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Search,
    Help,
}

/// Events from background search tasks
#[derive(Debug)]
pub enum AppEvent {
    SearchFinished {
        generation: u64,
        outcome: Result<ProxyReply, ClientError>,
    },
}

/// Main application state
pub struct App {
    pub view: View,
    pub should_quit: bool,

    pub input: TextArea<'static>,
    pub results: Vec<PodcastResult>,
    pub selected: usize,
    pub loading: bool,
    pub notifications: Vec<Notification>,
    pub tick: usize,

    backend: Arc<dyn SearchBackend>,
    clipboard: Box<dyn Clipboard>,

    // Bumped on every search; completions carrying an older value are stale
    generation: u64,
    in_flight: Option<JoinHandle<()>>,

    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(backend: Arc<dyn SearchBackend>, clipboard: Box<dyn Clipboard>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(16);

        Self {
            view: View::Search,
            should_quit: false,
            input: new_input(Vec::new()),
            results: Vec::new(),
            selected: 0,
            loading: false,
            notifications: Vec::new(),
            tick: 0,
            backend,
            clipboard,
            generation: 0,
            in_flight: None,
            event_rx,
            event_tx,
        }
    }

    /// Current keyword, untrimmed
    pub fn keyword(&self) -> String {
        self.input.lines().join("")
    }

    pub fn set_keyword(&mut self, keyword: &str) {
        self.input = new_input(vec![keyword.to_string()]);
    }

    pub fn selected_result(&self) -> Option<&PodcastResult> {
        self.results.get(self.selected)
    }

    /// Handle a user action
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::Submit => {
                if self.view == View::Search {
                    self.handle_search();
                }
            }
            AppAction::Copy => {
                self.copy_selected();
            }
            AppAction::ToggleHelp => {
                self.view = if self.view == View::Help {
                    View::Search
                } else {
                    View::Help
                };
            }
            AppAction::Escape => {
                self.view = View::Search;
            }
            AppAction::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppAction::SelectNext => {
                if self.selected + 1 < self.results.len() {
                    self.selected += 1;
                }
            }
            AppAction::Input(key) => {
                if self.view == View::Help {
                    self.view = View::Search;
                } else {
                    self.input.input(key);
                }
            }
            AppAction::Tick => {
                self.tick = self.tick.wrapping_add(1);
                self.prune_notifications(Instant::now());
            }
        }
    }

    /// Start a search for the current keyword
    pub fn handle_search(&mut self) {
        let keyword = self.keyword().trim().to_string();
        if keyword.is_empty() {
            self.notify(NotificationLevel::Error, "Please enter a keyword", None);
            return;
        }

        if let Some(handle) = self.in_flight.take() {
            handle.abort();
            debug!("Superseded in-flight search");
        }

        self.generation += 1;
        let generation = self.generation;

        self.loading = true;
        self.results.clear();
        self.selected = 0;

        info!(keyword = %keyword, generation, "Starting search");

        let backend = Arc::clone(&self.backend);
        let tx = self.event_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = backend.search(&keyword).await;
            tx.send(AppEvent::SearchFinished { generation, outcome })
                .await
                .ok();
        }));
    }

    /// Wait for the next background event
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchFinished { generation, outcome } => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "Dropping stale search result");
                    return;
                }
                self.in_flight = None;
                self.loading = false;
                self.apply_outcome(outcome);
            }
        }
    }

    fn apply_outcome(&mut self, outcome: Result<ProxyReply, ClientError>) {
        match outcome {
            Ok(ProxyReply::Error { error }) => {
                self.notify(NotificationLevel::Error, "Search failed", Some(error));
            }
            Ok(ProxyReply::Results { result, exact_match }) if !result.is_empty() => {
                self.results = result;
                self.selected = 0;
                if !exact_match {
                    self.notify(
                        NotificationLevel::Info,
                        "Notice",
                        Some("No exact match found, showing related results".to_string()),
                    );
                }
            }
            Ok(ProxyReply::Results { .. }) => {
                self.notify(NotificationLevel::Error, "No podcasts found", None);
            }
            Err(e) => {
                warn!(error = %e, "Search request failed");
                self.notify(
                    NotificationLevel::Error,
                    "Search failed",
                    Some("Please try again later".to_string()),
                );
            }
        }
    }

    /// Copy the RSS link of the selected result
    pub fn copy_selected(&mut self) {
        if let Some(result) = self.selected_result() {
            let link = rss_link(&result.seq);
            self.copy_to_clipboard(&link);
        }
    }

    pub fn copy_to_clipboard(&mut self, rss_link: &str) {
        match self.clipboard.set_text(rss_link) {
            Ok(()) => {
                self.notify(NotificationLevel::Success, "Copied", None);
            }
            Err(e) => {
                warn!(error = %e, "Clipboard write failed");
                self.notify(
                    NotificationLevel::Error,
                    "Copy failed",
                    Some("Please copy the link manually".to_string()),
                );
            }
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, title: &str, description: Option<String>) {
        self.notifications.push(Notification {
            level,
            title: title.to_string(),
            description,
            created_at: Instant::now(),
        });
    }

    /// Drop notifications older than [`NOTIFICATION_TTL`]
    pub fn prune_notifications(&mut self, now: Instant) {
        self.notifications
            .retain(|n| now.duration_since(n.created_at) < NOTIFICATION_TTL);
    }
}

fn new_input(lines: Vec<String>) -> TextArea<'static> {
    let mut input = if lines.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(lines)
    };
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_placeholder_text(INPUT_PLACEHOLDER);
    input.move_cursor(tui_textarea::CursorMove::End);
    input
}
