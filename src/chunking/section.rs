//! Heading context tracking

use crate::types::{DEFAULT_HEADING_LEVEL, DEFAULT_TITLE};

/// Active heading context for the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTracker {
    title: String,
    level: u8,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            level: DEFAULT_HEADING_LEVEL,
        }
    }

    /// Apply a heading. Returns `true` when it opens a new section, in which
    /// case the caller must close the current buffer. Headings whose text is
    /// blank change nothing.
    pub fn enter(&mut self, level: u8, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.title = text.to_string();
        self.level = level;
        true
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
