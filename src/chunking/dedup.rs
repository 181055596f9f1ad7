//! Document-wide text deduplication
//!
//! A block is a duplicate when it equals, is contained in, or contains any
//! block accepted earlier in the same document. Containment matters: a table
//! whose rendered text reappears as a standalone paragraph (or the reverse)
//! must only be kept once, whichever came first.
//!
//! Each check scans every accepted text, so a document with `n` accepted
//! blocks costs O(n²) substring searches overall. Hash-based exact matching
//! would miss containment and change which blocks survive.

/// Texts accepted so far in one chunking pass
#[derive(Debug, Default)]
pub struct DeduplicationIndex {
    accepted: Vec<String>,
}

impl DeduplicationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a candidate against every accepted text
    pub fn is_duplicate(&self, candidate: &str) -> bool {
        self.accepted.iter().any(|accepted| {
            accepted == candidate || accepted.contains(candidate) || candidate.contains(accepted.as_str())
        })
    }

    /// Record an accepted text. Exact repeats and blank text are not stored.
    pub fn record(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        if !self.accepted.iter().any(|accepted| accepted == text) {
            self.accepted.push(text.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}
