//! Word-budgeted buffering of accepted blocks

use super::tokenizer::word_count;
use crate::types::{DEFAULT_HEADING_LEVEL, DEFAULT_TITLE};

/// Working buffer for one chunk-in-progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkBuffer {
    pub title: String,
    pub heading_level: u8,
    /// Accepted blocks in document order
    pub segments: Vec<String>,
    pub word_count: usize,
}

impl ChunkBuffer {
    /// Empty buffer under the given heading context
    pub fn new(title: impl Into<String>, heading_level: u8) -> Self {
        Self {
            title: title.into(),
            heading_level,
            segments: Vec::new(),
            word_count: 0,
        }
    }

    /// Empty buffer carrying this buffer's heading context
    pub fn continuation(&self) -> Self {
        Self::new(self.title.clone(), self.heading_level)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Default for ChunkBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_HEADING_LEVEL)
    }
}

/// Holds the open buffer and enforces the word budget.
///
/// A budget of zero or less is allowed: every non-empty buffer is then over
/// budget, so each accepted block lands in its own chunk. An empty buffer
/// takes any block, so a single block larger than the budget is kept whole.
#[derive(Debug)]
pub struct ChunkAccumulator {
    buffer: ChunkBuffer,
    max_words: i64,
}

impl ChunkAccumulator {
    pub fn new(max_words: i64) -> Self {
        Self {
            buffer: ChunkBuffer::default(),
            max_words,
        }
    }

    /// Append an accepted block. If it would push a non-empty buffer past the
    /// budget, the full buffer is returned for emission and the block starts
    /// a continuation buffer under the same heading.
    pub fn add_text(&mut self, text: &str) -> Option<ChunkBuffer> {
        let new_words = word_count(text);

        let mut finished = None;
        if self.would_overflow(new_words) && !self.buffer.is_empty() {
            let continuation = self.buffer.continuation();
            finished = Some(std::mem::replace(&mut self.buffer, continuation));
        }

        self.buffer.segments.push(text.to_string());
        self.buffer.word_count += new_words;
        finished
    }

    /// Close the open buffer and start an empty one under a new heading.
    /// Returns the closed buffer, which may be empty.
    pub fn restart(&mut self, title: &str, heading_level: u8) -> ChunkBuffer {
        std::mem::replace(&mut self.buffer, ChunkBuffer::new(title, heading_level))
    }

    /// Hand back the trailing buffer
    pub fn finish(self) -> ChunkBuffer {
        self.buffer
    }

    /// The open buffer
    pub fn current(&self) -> &ChunkBuffer {
        &self.buffer
    }

    fn would_overflow(&self, new_words: usize) -> bool {
        let total = self.buffer.word_count.saturating_add(new_words);
        i64::try_from(total).map_or(true, |total| total > self.max_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_buffer_context() {
        let buffer = ChunkBuffer::default();
        assert_eq!(buffer.title, "Content");
        assert_eq!(buffer.heading_level, 2);
        assert!(buffer.is_empty());
        assert_eq!(buffer.word_count, 0);
    }

    #[test]
    fn test_accumulates_within_budget() {
        let mut acc = ChunkAccumulator::new(10);
        assert!(acc.add_text("one two three").is_none());
        assert!(acc.add_text("four five six seven").is_none());
        assert_eq!(acc.current().word_count, 7);
        assert_eq!(acc.current().segments.len(), 2);
    }

    #[test]
    fn test_splits_on_overflow_with_same_context() {
        let mut acc = ChunkAccumulator::new(5);
        acc.restart("Section", 3);
        assert!(acc.add_text("one two three").is_none());

        let finished = acc
            .add_text("four five six")
            .expect("budget overflow closes the buffer");
        assert_eq!(finished.segments, vec!["one two three".to_string()]);
        assert_eq!(finished.word_count, 3);

        let current = acc.current();
        assert_eq!(current.title, "Section");
        assert_eq!(current.heading_level, 3);
        assert_eq!(current.segments, vec!["four five six".to_string()]);
        assert_eq!(current.word_count, 3);
    }

    #[test]
    fn test_exact_budget_does_not_split() {
        let mut acc = ChunkAccumulator::new(6);
        acc.add_text("one two three");
        assert!(acc.add_text("four five six").is_none());
        assert_eq!(acc.current().word_count, 6);
    }

    #[test]
    fn test_oversized_block_kept_whole() {
        let mut acc = ChunkAccumulator::new(2);
        let big = "a b c d e f g h";
        assert!(acc.add_text(big).is_none());
        assert_eq!(acc.current().word_count, 8);
        assert_eq!(acc.current().segments, vec![big.to_string()]);
    }

    #[test]
    fn test_non_positive_budget_flushes_every_block() {
        for max_words in [0, -5] {
            let mut acc = ChunkAccumulator::new(max_words);
            assert!(acc.add_text("first block of words").is_none());
            let finished = acc.add_text("second block of words").unwrap();
            assert_eq!(finished.segments.len(), 1);
            let finished = acc.add_text("third block of words").unwrap();
            assert_eq!(finished.segments, vec!["second block of words".to_string()]);
        }
    }

    #[test]
    fn test_restart_returns_previous_buffer() {
        let mut acc = ChunkAccumulator::new(100);
        acc.add_text("some words here");
        let closed = acc.restart("Next", 1);
        assert_eq!(closed.title, "Content");
        assert_eq!(closed.segments.len(), 1);

        let empty = acc.restart("After", 2);
        assert!(empty.is_empty());
        assert_eq!(empty.title, "Next");

        let trailing = acc.finish();
        assert_eq!(trailing.title, "After");
        assert!(trailing.is_empty());
    }
}
