//! Application state and the update loop driving it.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use catalog::core::session::CatalogSession;
use catalog::io::client::FetchPage;
use tracing::{debug, warn};

use crate::action::Action;
use crate::fetch::{FetchOutcome, spawn_fetch};

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the row-count input.
    Count,
}

/// Top-level UI state: the catalog session plus presentation-only state
/// (cursor, input buffer, notification modal).
pub struct App {
    pub session: CatalogSession,
    client: Arc<dyn FetchPage + Send + Sync>,
    fetch_tx: Sender<FetchOutcome>,
    fetch_rx: Receiver<FetchOutcome>,
    pub cursor: usize,
    pub input_mode: InputMode,
    pub count_input: String,
    /// Blocking notification; any key dismisses it.
    pub notification: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(client: Arc<dyn FetchPage + Send + Sync>) -> Self {
        let (fetch_tx, fetch_rx) = channel();
        Self {
            session: CatalogSession::new(),
            client,
            fetch_tx,
            fetch_rx,
            cursor: 0,
            input_mode: InputMode::Normal,
            count_input: String::new(),
            notification: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Kick off a fetch for `page_number` on a background thread.
    pub fn request_page(&mut self, page_number: u32) {
        let token = self.session.begin_fetch(page_number);
        self.cursor = 0;
        spawn_fetch(self.client.clone(), token, self.fetch_tx.clone());
    }

    /// Process one user action. Returns true when the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // The notification modal blocks everything except ticks.
        if self.notification.is_some() {
            match action {
                Action::Tick => self.drain_fetches(),
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::None => {}
                _ => self.notification = None,
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::MoveDown => {
                let last = self.session.records().len().saturating_sub(1);
                if self.cursor < last {
                    self.cursor += 1;
                }
            }
            Action::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::ToggleRow => {
                if let Some(artwork) = self.session.records().get(self.cursor) {
                    let id = artwork.id;
                    self.session.toggle_row(id);
                }
            }
            Action::NextPage => {
                let next = self.session.next_page_number();
                if next != self.session.page_number() {
                    self.request_page(next);
                }
            }
            Action::PrevPage => {
                let prev = self.session.prev_page_number();
                if prev != self.session.page_number() {
                    self.request_page(prev);
                }
            }
            Action::StartCount => {
                self.input_mode = InputMode::Count;
                self.count_input.clear();
            }
            Action::Input(c) => {
                self.count_input.push(c);
            }
            Action::Backspace => {
                self.count_input.pop();
            }
            Action::Confirm => self.confirm_count(),
            Action::Cancel => {
                self.input_mode = InputMode::Normal;
                self.count_input.clear();
            }
            Action::Tick => self.drain_fetches(),
            Action::None => {}
        }
        false
    }

    /// Run the bulk select with the typed count.
    ///
    /// Invalid input raises the blocking notification and leaves the
    /// selection set unchanged; the input buffer is kept so the user can
    /// correct it.
    fn confirm_count(&mut self) {
        let outcome = catalog::core::selection::parse_row_count(&self.count_input)
            .and_then(|count| self.session.select_first(count));
        match outcome {
            Ok(()) => {
                self.input_mode = InputMode::Normal;
                self.count_input.clear();
            }
            Err(err) => {
                self.notification = Some(format!("Enter a valid number: {err}"));
            }
        }
    }

    /// Apply completed background fetches. Stale results are dropped by the
    /// session's token check; a failed fetch keeps the previous table.
    fn drain_fetches(&mut self) {
        while let Ok(outcome) = self.fetch_rx.try_recv() {
            match outcome.result {
                Ok(page) => {
                    if !self.session.apply_fetch(outcome.token, page) {
                        debug!(
                            page = outcome.token.page_number(),
                            "dropping superseded fetch result"
                        );
                    }
                    self.clamp_cursor();
                }
                Err(err) => {
                    if self.session.fetch_failed(outcome.token) {
                        warn!(
                            page = outcome.token.page_number(),
                            error = %err,
                            "catalog fetch failed, keeping previous page"
                        );
                    }
                }
            }
        }
    }

    fn clamp_cursor(&mut self) {
        let last = self.session.records().len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }
}
