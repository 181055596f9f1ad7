//! Extraction collaborator
//!
//! Turns raw HTML into the noise-reduced form the chunker consumes. The
//! chunker only sees the [`Extractor`] trait:
//!
//! - [`ProcessExtractor`] runs the recall-oriented extractor script as a subprocess
//! - [`PassthroughExtractor`] hands the input back untouched, for already-cleaned HTML

mod process;

pub use process::ProcessExtractor;

use async_trait::async_trait;
use std::fmt::{self, Debug};
use std::str::FromStr;

/// Output forms the extractor can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Txt,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Html, OutputFormat::Txt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown output format name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid output format: {0}. Valid formats: html, txt")]
pub struct FormatError(pub String);

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| FormatError(s.to_string()))
    }
}

/// Errors from an extraction call. They reach the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Scratch file or process I/O failed
    #[error("Extractor I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The extractor process exited unsuccessfully
    #[error("Extractor `{program}` failed (exit code {code:?}): {stderr}")]
    ProcessFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The extractor produced output that is not UTF-8
    #[error("Extractor output is not valid UTF-8: {0}")]
    InvalidOutput(String),

    /// Generic error wrapper for other extractor implementations
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Converts raw HTML into cleaned HTML or plain text.
///
/// Implementations are called once per document, are not retried, and must
/// release any resources they acquire whether or not the call succeeds.
#[async_trait]
pub trait Extractor: Send + Sync + Debug {
    async fn extract(&self, raw_html: &str, format: OutputFormat) -> ExtractResult<String>;

    /// Backend name for logs
    fn name(&self) -> &str;
}

/// Returns the input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughExtractor;

#[async_trait]
impl Extractor for PassthroughExtractor {
    async fn extract(&self, raw_html: &str, _format: OutputFormat) -> ExtractResult<String> {
        Ok(raw_html.to_string())
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}
