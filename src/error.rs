//! Error types for glyphpick.
//!
//! This module provides error handling following the thiserror pattern.
//! Error types are designed to be informative, actionable, and suitable for
//! both programmatic handling and user-facing display.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for glyphpick operations.
#[derive(Error, Debug)]
pub enum GlyphError {
    /// The symbol catalog could not be read from disk.
    #[error("Failed to read catalog: {path}")]
    CatalogRead {
        /// Path to the unreadable catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The symbol catalog is not valid JSON or has the wrong shape.
    #[error("Failed to parse catalog {name}: {source}")]
    CatalogParse {
        /// Display name of the catalog source (path or "embedded").
        name: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// No catalog entry matched the given query.
    #[error("No symbol matches '{query}'")]
    SymbolNotFound {
        /// The query that matched nothing.
        query: String,
    },

    /// More than one catalog entry matched a query that must be unique.
    #[error("'{query}' is ambiguous ({count} matches); use the exact symbol or name")]
    AmbiguousSymbol {
        /// The ambiguous query.
        query: String,
        /// Number of records it matched.
        count: usize,
    },

    /// Clipboard access or write failed.
    #[error("Clipboard error: {message}")]
    Clipboard {
        /// Human-readable error message.
        message: String,
    },

    /// Invalid configuration file or value.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {context}")]
    SerializationError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// Interrupted operation (Ctrl+C or cancelled prompt).
    #[error("Operation interrupted")]
    Interrupted,
}

impl GlyphError {
    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Create a new clipboard error.
    #[must_use]
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CatalogRead { .. } | Self::CatalogParse { .. } => 2,
            Self::SymbolNotFound { .. } | Self::AmbiguousSymbol { .. } => 3,
            Self::InvalidConfig { .. } => 5,
            Self::Clipboard { .. } => 6,
            Self::Interrupted => 130,
            Self::IoError { .. } => 74,
            Self::SerializationError { .. } => 1,
        }
    }
}

/// Result type alias for glyphpick operations.
pub type Result<T> = std::result::Result<T, GlyphError>;

impl From<std::io::Error> for GlyphError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for GlyphError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}

/// Exit codes for CLI operations.
pub mod exit_codes {
    /// Operation completed successfully.
    pub const EXIT_SUCCESS: i32 = 0;
    /// General/unspecified error.
    pub const EXIT_GENERAL_ERROR: i32 = 1;
    /// Catalog could not be read or parsed.
    pub const EXIT_CATALOG_ERROR: i32 = 2;
    /// Requested symbol not found (or ambiguous).
    pub const EXIT_NOT_FOUND: i32 = 3;
    /// Invalid configuration.
    pub const EXIT_CONFIG_ERROR: i32 = 5;
    /// Clipboard access failed.
    pub const EXIT_CLIPBOARD_ERROR: i32 = 6;
    /// I/O error (BSD standard).
    pub const EXIT_IO_ERROR: i32 = 74;
    /// Terminated by Ctrl+C (128 + SIGINT).
    pub const EXIT_INTERRUPTED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = GlyphError::SymbolNotFound {
            query: "zzz".to_string(),
        };
        assert_eq!(not_found.exit_code(), 3);

        let clipboard = GlyphError::clipboard("no display");
        assert_eq!(clipboard.exit_code(), 6);

        let interrupted = GlyphError::Interrupted;
        assert_eq!(interrupted.exit_code(), 130);
    }

    #[test]
    fn test_error_display() {
        let err = GlyphError::SymbolNotFound {
            query: "wavy".to_string(),
        };
        assert_eq!(err.to_string(), "No symbol matches 'wavy'");

        let err = GlyphError::AmbiguousSymbol {
            query: "arrow".to_string(),
            count: 8,
        };
        assert!(err.to_string().contains("8 matches"));
    }
}
