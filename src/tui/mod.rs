//! Interactive symbol picker built on ratatui.
//!
//! The popup shows a debounced search box over the catalog, a sectioned
//! grid (favorites, recent, results), and copies the selected glyph on
//! Enter before closing itself shortly after.

pub mod app;
pub mod debounce;
pub mod events;
pub mod state;
pub mod theme;

pub use app::run;
pub use state::{Action, AppState};
pub use theme::{available_themes, Theme};
