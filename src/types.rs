//! Core types for the chunker

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title given to content that appears before any heading
pub const DEFAULT_TITLE: &str = "Content";

/// Heading level given to content that appears before any heading
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Default soft word ceiling per chunk
pub const DEFAULT_MAX_WORDS: i64 = 400;

// ============================================================================
// Walk output
// ============================================================================

/// A block-level node classified once during the document walk.
///
/// The text is the node's trimmed text content; inner markup is never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentElement {
    /// `h1`..`h6`
    Heading { level: u8, text: String },
    /// `p`
    Paragraph(String),
    /// `li`
    ListItem(String),
    /// `blockquote`
    Blockquote(String),
    /// `table`, rendered as the concatenated text of all cells
    Table(String),
}

impl ContentElement {
    /// Classify an element by tag name. Returns `None` for tags the walker ignores.
    pub fn from_tag(tag: &str, text: String) -> Option<Self> {
        let element = match tag {
            "h1" => Self::Heading { level: 1, text },
            "h2" => Self::Heading { level: 2, text },
            "h3" => Self::Heading { level: 3, text },
            "h4" => Self::Heading { level: 4, text },
            "h5" => Self::Heading { level: 5, text },
            "h6" => Self::Heading { level: 6, text },
            "p" => Self::Paragraph(text),
            "li" => Self::ListItem(text),
            "blockquote" => Self::Blockquote(text),
            "table" => Self::Table(text),
            _ => return None,
        };
        Some(element)
    }

    /// The element's text
    pub fn text(&self) -> &str {
        match self {
            Self::Heading { text, .. } => text,
            Self::Paragraph(text)
            | Self::ListItem(text)
            | Self::Blockquote(text)
            | Self::Table(text) => text,
        }
    }

    /// Short kind label used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Paragraph(_) => "paragraph",
            Self::ListItem(_) => "list_item",
            Self::Blockquote(_) => "blockquote",
            Self::Table(_) => "table",
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// One unit of chunker output: heading context plus bounded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// Text of the nearest preceding non-empty heading
    pub title: String,
    /// Level (1-6) of that heading
    pub heading_level: u8,
    /// Accepted blocks joined by a single space
    pub content: String,
    /// Whitespace-token count of `content`
    pub word_count: usize,
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} words)\n{}",
            "#".repeat(self.heading_level as usize),
            self.title,
            self.word_count,
            self.content
        )
    }
}
