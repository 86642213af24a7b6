//! glyphpick: terminal symbol picker.
//!
//! Search a catalog of special characters (Greek letters, arrows, math
//! operators, currency signs, typography marks), copy the chosen glyph to
//! the system clipboard, and keep persisted recent and favorite lists.
//!
//! The crate exposes both a scriptable CLI and a full-screen TUI; the
//! library layer underneath (catalog, store, clipboard) is usable on its
//! own.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod store;
pub mod tui;
pub mod util;

pub use catalog::{Catalog, SymbolRecord};
pub use error::{GlyphError, Result};
pub use store::SymbolStore;

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
