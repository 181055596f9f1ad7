//! Heading-aware chunking of cleaned HTML
//!
//! Features:
//! - Single-pass walk over headings and block elements
//! - Length, word-count and containment-based block filtering
//! - Word-budgeted chunks that inherit their heading context

mod accumulator;
mod dedup;
mod emitter;
mod quality;
mod section;
mod session;
mod tokenizer;
mod walker;

pub use accumulator::{ChunkAccumulator, ChunkBuffer};
pub use dedup::DeduplicationIndex;
pub use emitter::ChunkEmitter;
pub use quality::{QualityFilter, Rejection};
pub use section::SectionTracker;
pub use session::{chunk_html, ChunkSession, SessionStats};
pub use tokenizer::{word_count, WordTokenizer};
pub use walker::{DocumentWalker, BLOCK_SELECTOR};
