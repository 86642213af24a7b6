//! Persisted recent/favorite symbol lists.
//!
//! [`SymbolStore`] owns the bounded most-recently-used list and the
//! insertion-ordered favorite set, and is the sole persistence boundary:
//! every mutation writes the full state back to disk (atomically) before
//! returning. Read failures degrade to empty lists; write failures leave the
//! in-memory state ahead of disk until the next successful write.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::SymbolRecord;
use crate::error::{GlyphError, Result};
use crate::util::atomic_write;

/// Maximum number of entries kept in the recent list.
pub const MAX_RECENT: usize = 10;

/// On-disk state document, matching the original storage keys.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    recent: Vec<SymbolRecord>,
    #[serde(default)]
    favorites: Vec<SymbolRecord>,
}

/// Recent and favorite symbols, backed by a JSON file.
#[derive(Debug)]
pub struct SymbolStore {
    /// Backing file. `None` means in-memory only.
    path: Option<PathBuf>,
    recent: Vec<SymbolRecord>,
    favorites: IndexMap<String, SymbolRecord>,
}

impl SymbolStore {
    /// Create an empty store with no backing file.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            recent: Vec::new(),
            favorites: IndexMap::new(),
        }
    }

    /// Open a store backed by the given file.
    ///
    /// A missing file yields empty lists; an unreadable or malformed file is
    /// warn-logged and also yields empty lists (the persisted state is not
    /// worth failing startup over).
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let state = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<PersistedState>(&content) {
                Ok(state) => state,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "malformed state file, starting empty");
                    PersistedState::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PersistedState::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read state file, starting empty");
                PersistedState::default()
            }
        };

        let mut store = Self {
            path: Some(path),
            recent: Vec::new(),
            favorites: IndexMap::new(),
        };

        // Re-apply the invariants on load: a hand-edited file must not be
        // able to violate the bound or introduce duplicate keys.
        for record in state.recent.into_iter().take(MAX_RECENT) {
            if !store.recent.iter().any(|r| r.symbol == record.symbol) {
                store.recent.push(record);
            }
        }
        for record in state.favorites {
            store.favorites.entry(record.symbol.clone()).or_insert(record);
        }

        debug!(
            recent = store.recent.len(),
            favorites = store.favorites.len(),
            "loaded symbol store"
        );
        store
    }

    /// Open the store at the default platform location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Self::default_path()?))
    }

    /// Default state file location: `<data dir>/glyphpick/state.json`.
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| GlyphError::IoError {
            context: "Could not determine platform data directory".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no data directory"),
        })?;
        Ok(data_dir.join("glyphpick").join("state.json"))
    }

    /// The recent list, most-recently-used first.
    #[must_use]
    pub fn recent(&self) -> &[SymbolRecord] {
        &self.recent
    }

    /// Favorites in insertion order.
    pub fn favorites(&self) -> impl Iterator<Item = &SymbolRecord> {
        self.favorites.values()
    }

    /// Number of favorites.
    #[must_use]
    pub fn favorites_len(&self) -> usize {
        self.favorites.len()
    }

    /// Whether the given glyph is currently favorited.
    #[must_use]
    pub fn is_favorite(&self, symbol: &str) -> bool {
        self.favorites.contains_key(symbol)
    }

    /// Record that a symbol was copied.
    ///
    /// Any existing entry with the same glyph is removed, the record is
    /// inserted at the front, and the list is truncated to [`MAX_RECENT`].
    /// The updated state is persisted before returning.
    pub fn record_usage(&mut self, record: &SymbolRecord) -> Result<()> {
        self.recent.retain(|r| r.symbol != record.symbol);
        self.recent.insert(0, record.clone());
        self.recent.truncate(MAX_RECENT);
        self.persist()
    }

    /// Toggle a symbol's favorite status. Calling twice with the same record
    /// restores the prior state.
    pub fn toggle_favorite(&mut self, record: &SymbolRecord) -> Result<()> {
        if self.favorites.shift_remove(&record.symbol).is_none() {
            self.favorites.insert(record.symbol.clone(), record.clone());
        }
        self.persist()
    }

    /// Drop all recent entries and persist.
    pub fn clear_recent(&mut self) -> Result<()> {
        self.recent.clear();
        self.persist()
    }

    /// Drop all favorites and persist.
    pub fn clear_favorites(&mut self) -> Result<()> {
        self.favorites.clear();
        self.persist()
    }

    /// Write the current state to the backing file, if any.
    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let state = PersistedState {
            recent: self.recent.clone(),
            favorites: self.favorites.values().cloned().collect(),
        };
        let content = serde_json::to_vec_pretty(&state).map_err(|e| {
            GlyphError::SerializationError {
                context: format!("Failed to serialize state for: {}", path.display()),
                source: e,
            }
        })?;

        atomic_write(path, &content)
    }
}
