//! Chunking configuration

use crate::types::DEFAULT_MAX_WORDS;
use serde::{Deserialize, Serialize};

/// Chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Soft word ceiling per chunk. Zero or negative flushes after every block.
    #[serde(default = "default_max_words")]
    pub max_words: i64,
    /// Blocks with fewer trimmed characters are dropped
    #[serde(default = "default_min_block_chars")]
    pub min_block_chars: usize,
    /// Blocks with fewer whitespace tokens are dropped
    #[serde(default = "default_min_block_words")]
    pub min_block_words: usize,
}

fn default_max_words() -> i64 {
    DEFAULT_MAX_WORDS
}

fn default_min_block_chars() -> usize {
    15
}

fn default_min_block_words() -> usize {
    5
}

impl ChunkingConfig {
    /// Same thresholds with a different word budget
    pub fn with_max_words(&self, max_words: i64) -> Self {
        Self {
            max_words,
            ..self.clone()
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_words: default_max_words(),
            min_block_chars: default_min_block_chars(),
            min_block_words: default_min_block_words(),
        }
    }
}
