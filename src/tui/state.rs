//! TUI application state.
//!
//! All interaction flows as [`Action`] messages through [`AppState::dispatch`],
//! so the selection machine, activation, and list maintenance are unit
//! testable without a terminal or a real clipboard.

use std::time::{Duration, Instant};

use ratatui::style::Color;
use tracing::warn;

use crate::catalog::{Catalog, SymbolRecord};
use crate::clipboard::ClipboardSink;
use crate::store::SymbolStore;

use super::debounce::Debouncer;
use super::theme::{random_pastel, Theme};

/// How long the copy toast stays solid before fading.
pub const TOAST_SOLID: Duration = Duration::from_millis(1000);
/// How long the fade lasts before the toast disappears.
pub const TOAST_FADE: Duration = Duration::from_millis(300);
/// Delay between a successful copy and closing the popup.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(800);

/// Which part of the grid an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Pinned favorites, shown first.
    Favorites,
    /// Recently copied symbols.
    Recent,
    /// Filtered search results.
    Results,
}

impl Section {
    /// Section heading shown in the TUI.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Favorites => "Favorites",
            Self::Recent => "Recent",
            Self::Results => "Results",
        }
    }
}

/// One interactive item in the flattened grid.
#[derive(Debug, Clone)]
pub struct GridItem {
    /// The catalog record behind the item.
    pub record: SymbolRecord,
    /// Section the item is rendered under.
    pub section: Section,
    /// Whether the record is currently favorited.
    pub favorite: bool,
}

/// User intent, dispatched to the single state-update function.
#[derive(Debug, Clone)]
pub enum Action {
    /// The search query text changed (debounced before filtering).
    QueryChanged(String),
    /// Move selection one item left.
    MoveLeft,
    /// Move selection one item right.
    MoveRight,
    /// Move selection one row up.
    MoveUp,
    /// Move selection one row down.
    MoveDown,
    /// Activate the selected item (copy to clipboard).
    Activate,
    /// Toggle favorite status of the selected item.
    ToggleFavorite,
    /// Close the popup.
    Close,
}

/// Transient copy confirmation.
#[derive(Debug, Clone)]
pub struct Toast {
    shown_at: Instant,
}

impl Toast {
    fn new(now: Instant) -> Self {
        Self { shown_at: now }
    }

    /// Whether the toast has entered its fade-out phase.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_SOLID
    }

    /// Whether the toast should no longer be drawn at all.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_SOLID + TOAST_FADE
    }
}

/// Application state.
pub struct AppState {
    catalog: Catalog,
    /// Persisted recent/favorite lists.
    pub store: SymbolStore,
    clipboard: Box<dyn ClipboardSink>,
    /// Current theme.
    pub theme: Theme,
    /// Current search query (raw, undebounced).
    pub query: String,
    /// The flattened grid: favorites, then recent, then results.
    pub items: Vec<GridItem>,
    /// Selected grid index; `None` until the user starts navigating.
    pub selected: Option<usize>,
    /// Grid column count, derived from the rendered layout on each draw.
    pub columns: usize,
    /// Cosmetic pastel accent for the selected item.
    pub accent: Color,
    /// Active copy confirmation, if any.
    pub toast: Option<Toast>,
    /// Whether a successful copy schedules the popup to close.
    pub auto_close: bool,
    /// Set when the main loop should exit.
    pub should_quit: bool,
    close_at: Option<Instant>,
    debouncer: Debouncer,
}

impl AppState {
    /// Create the application state and build the initial grid.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        store: SymbolStore,
        theme: Theme,
        clipboard: Box<dyn ClipboardSink>,
        debounce: Duration,
        auto_close: bool,
    ) -> Self {
        let mut state = Self {
            catalog,
            store,
            clipboard,
            theme,
            query: String::new(),
            items: Vec::new(),
            selected: None,
            columns: 1,
            accent: random_pastel(),
            toast: None,
            auto_close,
            should_quit: false,
            close_at: None,
            debouncer: Debouncer::new(debounce),
        };
        state.rebuild_grid();
        state
    }

    /// Rebuild the flattened grid from the store and the current query.
    ///
    /// Any grid change invalidates the selection, so this always resets it.
    pub fn rebuild_grid(&mut self) {
        let mut items = Vec::new();

        for record in self.store.favorites() {
            items.push(GridItem {
                record: record.clone(),
                section: Section::Favorites,
                favorite: true,
            });
        }
        for record in self.store.recent() {
            items.push(GridItem {
                record: record.clone(),
                section: Section::Recent,
                favorite: self.store.is_favorite(&record.symbol),
            });
        }
        for record in self.catalog.filter(&self.query) {
            items.push(GridItem {
                record: record.clone(),
                section: Section::Results,
                favorite: self.store.is_favorite(&record.symbol),
            });
        }

        self.items = items;
        self.selected = None;
    }

    /// Item counts per section, in render order.
    #[must_use]
    pub fn section_counts(&self) -> (usize, usize, usize) {
        let favorites = self
            .items
            .iter()
            .filter(|i| i.section == Section::Favorites)
            .count();
        let recent = self
            .items
            .iter()
            .filter(|i| i.section == Section::Recent)
            .count();
        (favorites, recent, self.items.len() - favorites - recent)
    }

    /// Record the column count derived from the rendered layout.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    /// Whether the popup is scheduled to close after the grace period.
    #[must_use]
    pub fn closing(&self) -> bool {
        self.close_at.is_some()
    }

    /// Apply a user action.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        match action {
            Action::QueryChanged(query) => {
                self.query = query;
                self.debouncer.arm(now);
            }
            Action::MoveLeft => self.move_selection(|i, _n, _c| i.saturating_sub(1)),
            Action::MoveRight => self.move_selection(|i, n, _c| (i + 1).min(n - 1)),
            Action::MoveUp => {
                // No selection yet: ArrowUp stays a no-op.
                if self.selected.is_some() {
                    self.move_selection(|i, _n, c| i.saturating_sub(c));
                }
            }
            Action::MoveDown => self.move_selection(|i, n, c| (i + c).min(n - 1)),
            Action::Activate => self.activate(now),
            Action::ToggleFavorite => self.toggle_favorite(),
            Action::Close => self.should_quit = true,
        }
    }

    /// Advance timers: debounced filtering, toast expiry, auto-close.
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.fire(now) {
            self.rebuild_grid();
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
        if self.close_at.is_some_and(|at| now >= at) {
            self.should_quit = true;
        }
    }

    fn move_selection(&mut self, step: impl Fn(usize, usize, usize) -> usize) {
        let n = self.items.len();
        if n == 0 {
            return;
        }
        let next = match self.selected {
            // First move from the implicit before-the-start position lands
            // on the first item.
            None => 0,
            Some(i) => step(i, n, self.columns),
        };
        if self.selected != Some(next) {
            self.selected = Some(next);
            self.accent = random_pastel();
        }
    }

    /// Copy the selected symbol to the clipboard.
    ///
    /// On success: toast, MRU update, schedule auto-close. On clipboard
    /// failure the error is logged and nothing else happens (no toast, no
    /// recent update, popup stays open).
    fn activate(&mut self, now: Instant) {
        let Some(index) = self.selected else {
            return;
        };
        let record = self.items[index].record.clone();

        if let Err(e) = self.clipboard.copy(&record.symbol) {
            warn!(symbol = %record.symbol, error = %e, "clipboard write failed");
            return;
        }

        self.toast = Some(Toast::new(now));
        if let Err(e) = self.store.record_usage(&record) {
            // In-memory state is already updated; disk will catch up on the
            // next successful write.
            warn!(error = %e, "failed to persist recent list");
        }
        self.rebuild_grid();
        if self.auto_close {
            self.close_at = Some(now + AUTO_CLOSE_DELAY);
        }
    }

    fn toggle_favorite(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let record = self.items[index].record.clone();

        if let Err(e) = self.store.toggle_favorite(&record) {
            warn!(error = %e, "failed to persist favorites");
        }
        // The favorite marker shows everywhere the record appears.
        self.rebuild_grid();
    }
}
