//! Symbol catalog: the static, read-only list of records available for
//! search, plus the filter engine over it.
//!
//! A default catalog ships embedded in the binary; users may point at their
//! own JSON file with the same shape (`{ "symbols": [...] }`) via config or
//! `--catalog`.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GlyphError, Result};

/// The default catalog shipped with the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../data/symbols.json");

static EMBEDDED_RECORDS: Lazy<Vec<SymbolRecord>> = Lazy::new(|| {
    // The embedded catalog is validated by tests; a parse failure here is a
    // packaging bug, not a runtime condition.
    serde_json::from_str::<CatalogFile>(EMBEDDED_CATALOG)
        .map(|f| f.symbols)
        .unwrap_or_default()
});

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    /// The glyph itself. Unique key within the catalog.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Additional search strings.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Category the symbol belongs to.
    #[serde(default)]
    pub category: String,
}

impl SymbolRecord {
    /// Check whether this record matches an already-lowercased query string.
    ///
    /// A record matches when the query is a substring of the lowercase name,
    /// of any lowercase alias, or of the lowercase category.
    #[must_use]
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self
                .aliases
                .iter()
                .any(|a| a.to_lowercase().contains(query_lower))
            || self.category.to_lowercase().contains(query_lower)
    }
}

/// On-disk catalog file shape.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    symbols: Vec<SymbolRecord>,
}

/// The loaded symbol catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<SymbolRecord>,
}

impl Catalog {
    /// Build a catalog from records already in memory.
    #[must_use]
    pub fn new(records: Vec<SymbolRecord>) -> Self {
        Self { records }
    }

    /// The catalog embedded in the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            records: EMBEDDED_RECORDS.clone(),
        }
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GlyphError::CatalogRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: CatalogFile =
            serde_json::from_str(&content).map_err(|e| GlyphError::CatalogParse {
                name: path.display().to_string(),
                source: e,
            })?;

        debug!(path = %path.display(), count = file.symbols.len(), "loaded catalog");
        Ok(Self::new(file.symbols))
    }

    /// Load from a user-supplied path, falling back to the embedded catalog.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::embedded()),
        }
    }

    /// All records, in catalog order.
    #[must_use]
    pub fn records(&self) -> &[SymbolRecord] {
        &self.records
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter the catalog by a query string.
    ///
    /// The query is trimmed and matched case-insensitively against each
    /// record's name, aliases, and category. An empty (or all-whitespace)
    /// query returns the whole catalog. Results preserve catalog order; there
    /// is no relevance ranking.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&SymbolRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.records.iter().collect();
        }
        self.records.iter().filter(|r| r.matches(&query)).collect()
    }

    /// Category names in first-seen order, deduplicated.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !record.category.is_empty() && !seen.contains(&record.category.as_str()) {
                seen.push(record.category.as_str());
            }
        }
        seen
    }

    /// Resolve a query to exactly one record.
    ///
    /// Resolution order: exact glyph match, then exact (case-insensitive)
    /// name or alias match, then substring filter when it yields a single
    /// record. Anything else is [`GlyphError::SymbolNotFound`] or
    /// [`GlyphError::AmbiguousSymbol`].
    pub fn resolve(&self, query: &str) -> Result<&SymbolRecord> {
        let trimmed = query.trim();

        if let Some(record) = self.records.iter().find(|r| r.symbol == trimmed) {
            return Ok(record);
        }

        let lower = trimmed.to_lowercase();
        if let Some(record) = self.records.iter().find(|r| {
            r.name.to_lowercase() == lower || r.aliases.iter().any(|a| a.to_lowercase() == lower)
        }) {
            return Ok(record);
        }

        let matches = self.filter(trimmed);
        match matches.len() {
            0 => Err(GlyphError::SymbolNotFound {
                query: trimmed.to_string(),
            }),
            1 => Ok(matches[0]),
            count => Err(GlyphError::AmbiguousSymbol {
                query: trimmed.to_string(),
                count,
            }),
        }
    }
}
