//! Clipboard access behind a small trait, so activation logic can be unit
//! tested without a windowing system.

use crate::error::{GlyphError, Result};

/// Destination for copied text.
pub trait ClipboardSink {
    /// Write text to the clipboard.
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The real system clipboard via arboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| GlyphError::clipboard(format!("Failed to access clipboard: {e}")))?;
        clipboard
            .set_text(text)
            .map_err(|e| GlyphError::clipboard(format!("Failed to copy to clipboard: {e}")))
    }
}

/// Copy text to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    SystemClipboard.copy(text)
}

/// In-memory sink for tests: records every copy, optionally failing.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    /// Everything copied so far, in order.
    pub copied: Vec<String>,
    /// When set, every copy fails with a clipboard error.
    pub fail: bool,
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(GlyphError::clipboard("simulated clipboard failure"));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}
