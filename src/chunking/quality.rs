//! Block quality filtering

use super::dedup::DeduplicationIndex;
use super::tokenizer::word_count;
use crate::config::ChunkingConfig;
use std::fmt;

/// Why a block was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Trimmed text has fewer characters than the minimum
    TooShort(usize),
    /// Fewer whitespace tokens than the minimum
    TooFewWords(usize),
    /// Equal to, inside, or containing an accepted block
    Duplicate,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(chars) => write!(f, "too short ({} chars)", chars),
            Self::TooFewWords(words) => write!(f, "too few words ({})", words),
            Self::Duplicate => f.write_str("duplicate"),
        }
    }
}

/// Length and word-count thresholds for content blocks
#[derive(Debug, Clone, Copy)]
pub struct QualityFilter {
    min_chars: usize,
    min_words: usize,
}

impl QualityFilter {
    pub fn new(min_chars: usize, min_words: usize) -> Self {
        Self {
            min_chars,
            min_words,
        }
    }

    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(config.min_block_chars, config.min_block_words)
    }

    /// Run every check, cheapest first.
    ///
    /// Blank text is always too short, whatever the thresholds: an empty string
    /// is contained in every other block and would poison the index.
    pub fn check(&self, text: &str, index: &DeduplicationIndex) -> Result<(), Rejection> {
        let chars = text.trim().chars().count();
        if chars == 0 || chars < self.min_chars {
            return Err(Rejection::TooShort(chars));
        }

        let words = word_count(text);
        if words < self.min_words {
            return Err(Rejection::TooFewWords(words));
        }

        if index.is_duplicate(text) {
            return Err(Rejection::Duplicate);
        }

        Ok(())
    }

    pub fn is_acceptable(&self, text: &str, index: &DeduplicationIndex) -> bool {
        self.check(text, index).is_ok()
    }
}

impl Default for QualityFilter {
    fn default() -> Self {
        Self::from_config(&ChunkingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_text() {
        let filter = QualityFilter::default();
        let index = DeduplicationIndex::new();
        // 5 words but only 9 characters
        assert_eq!(filter.check("a b c d e", &index), Err(Rejection::TooShort(9)));
        assert_eq!(
            filter.check("   padded   ", &index),
            Err(Rejection::TooShort(6))
        );
    }

    #[test]
    fn test_rejects_few_words() {
        let filter = QualityFilter::default();
        let index = DeduplicationIndex::new();
        assert_eq!(
            filter.check("Supercalifragilistic expialidocious words", &index),
            Err(Rejection::TooFewWords(3))
        );
    }

    #[test]
    fn test_length_boundary() {
        let filter = QualityFilter::default();
        let index = DeduplicationIndex::new();
        // Exactly 15 characters, 5 words
        assert!(filter.is_acceptable("aa bb cc dd eee", &index));
        // 14 characters
        assert!(!filter.is_acceptable("aa bb cc dd ee", &index));
    }

    #[test]
    fn test_rejects_duplicates() {
        let filter = QualityFilter::default();
        let mut index = DeduplicationIndex::new();
        let text = "This paragraph has more than enough words to pass";
        assert!(filter.is_acceptable(text, &index));
        index.record(text);
        assert_eq!(filter.check(text, &index), Err(Rejection::Duplicate));
    }

    #[test]
    fn test_custom_thresholds() {
        let filter = QualityFilter::new(0, 1);
        let index = DeduplicationIndex::new();
        assert!(filter.is_acceptable("word", &index));
        assert!(!filter.is_acceptable("   ", &index));
    }

    #[test]
    fn test_blank_text_rejected_with_zero_thresholds() {
        let filter = QualityFilter::new(0, 0);
        let index = DeduplicationIndex::new();
        assert_eq!(filter.check("", &index), Err(Rejection::TooShort(0)));
        assert_eq!(filter.check(" \n\t", &index), Err(Rejection::TooShort(0)));
        assert!(filter.is_acceptable("x", &index));
    }

    #[test]
    fn test_length_counts_chars_not_bytes_or_utf16_units() {
        let filter = QualityFilter::default();
        let index = DeduplicationIndex::new();
        // 14 chars, 5 words: two crabs are 8 UTF-8 bytes and 4 UTF-16 units
        let crabs = "aa bb cc dd \u{1F980}\u{1F980}";
        assert_eq!(filter.check(crabs, &index), Err(Rejection::TooShort(14)));
        // 15 chars with accented letters, accepted although it is 20 bytes
        assert!(filter.is_acceptable("\u{e9}\u{e9} bb cc dd \u{e8}\u{e8}\u{e8}", &index));
    }
}
