//! Extraction followed by chunking

use crate::chunking::chunk_html;
use crate::config::{ChunkingConfig, Config};
use crate::extraction::{ExtractResult, Extractor, OutputFormat, PassthroughExtractor, ProcessExtractor};
use crate::types::Chunk;
use std::sync::Arc;
use tracing::debug;

/// Runs the extractor on raw HTML, then chunks its cleaned output.
///
/// Holds no per-document state, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct HtmlChunker {
    extractor: Arc<dyn Extractor>,
    config: ChunkingConfig,
}

impl HtmlChunker {
    pub fn new(extractor: Arc<dyn Extractor>, config: ChunkingConfig) -> Self {
        Self { extractor, config }
    }

    /// Chunker backed by the configured extractor process
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(ProcessExtractor::from_config(&config.extractor)),
            config.chunking.clone(),
        )
    }

    /// Chunker for input that is already cleaned
    pub fn pre_cleaned(config: &Config) -> Self {
        Self::new(Arc::new(PassthroughExtractor), config.chunking.clone())
    }

    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Chunk raw HTML with the configured word budget
    pub async fn chunk(&self, html: &str) -> ExtractResult<Vec<Chunk>> {
        self.chunk_with_max_words(html, self.config.max_words).await
    }

    /// Chunk raw HTML with an explicit word budget.
    ///
    /// Extraction errors are returned as-is and no chunking happens.
    pub async fn chunk_with_max_words(&self, html: &str, max_words: i64) -> ExtractResult<Vec<Chunk>> {
        let cleaned = self.extractor.extract(html, OutputFormat::Html).await?;
        if cleaned.trim().is_empty() {
            debug!("Extractor {} returned no content", self.extractor.name());
            return Ok(Vec::new());
        }

        Ok(chunk_html(&cleaned, &self.config.with_max_words(max_words)))
    }
}
