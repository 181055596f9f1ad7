//! One chunking pass over a cleaned document

use super::accumulator::ChunkAccumulator;
use super::dedup::DeduplicationIndex;
use super::emitter::ChunkEmitter;
use super::quality::{QualityFilter, Rejection};
use super::section::SectionTracker;
use super::walker::DocumentWalker;
use crate::config::ChunkingConfig;
use crate::types::{Chunk, ContentElement};
use scraper::Html;
use tracing::{debug, trace};

/// Counters reported once a pass finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub headings: usize,
    pub accepted: usize,
    pub too_short: usize,
    pub too_few_words: usize,
    pub duplicates: usize,
}

impl SessionStats {
    pub fn rejected(&self) -> usize {
        self.too_short + self.too_few_words + self.duplicates
    }

    fn record_rejection(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::TooShort(_) => self.too_short += 1,
            Rejection::TooFewWords(_) => self.too_few_words += 1,
            Rejection::Duplicate => self.duplicates += 1,
        }
    }
}

/// All mutable state for one pass. Built fresh for every document and
/// consumed by [`ChunkSession::finish`].
pub struct ChunkSession {
    sections: SectionTracker,
    filter: QualityFilter,
    index: DeduplicationIndex,
    accumulator: ChunkAccumulator,
    emitter: ChunkEmitter,
    stats: SessionStats,
}

impl ChunkSession {
    pub fn new(config: &ChunkingConfig) -> Self {
        Self {
            sections: SectionTracker::new(),
            filter: QualityFilter::from_config(config),
            index: DeduplicationIndex::new(),
            accumulator: ChunkAccumulator::new(config.max_words),
            emitter: ChunkEmitter::new(),
            stats: SessionStats::default(),
        }
    }

    /// Feed one walked element
    pub fn push(&mut self, element: ContentElement) {
        match element {
            ContentElement::Heading { level, text } => self.enter_heading(level, &text),
            block => self.add_block(&block),
        }
    }

    fn enter_heading(&mut self, level: u8, text: &str) {
        if !self.sections.enter(level, text) {
            trace!("Ignoring blank h{} heading", level);
            return;
        }
        self.stats.headings += 1;
        let closed = self
            .accumulator
            .restart(self.sections.title(), self.sections.level());
        self.emitter.finalize(closed);
    }

    fn add_block(&mut self, block: &ContentElement) {
        let text = block.text();
        if let Err(rejection) = self.filter.check(text, &self.index) {
            trace!("Rejected {} block: {}", block.kind(), rejection);
            self.stats.record_rejection(rejection);
            return;
        }

        if let Some(full) = self.accumulator.add_text(text) {
            self.emitter.finalize(full);
        }
        self.index.record(text);
        self.stats.accepted += 1;
    }

    /// Close the trailing buffer and return the chunks in document order
    pub fn finish(self) -> (Vec<Chunk>, SessionStats) {
        let Self {
            accumulator,
            mut emitter,
            stats,
            ..
        } = self;
        emitter.finalize(accumulator.finish());
        (emitter.into_chunks(), stats)
    }
}

/// Chunk already-cleaned HTML.
///
/// Never fails: malformed markup is parsed best-effort and blank input gives
/// an empty list.
pub fn chunk_html(cleaned_html: &str, config: &ChunkingConfig) -> Vec<Chunk> {
    if cleaned_html.trim().is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(cleaned_html);
    let selector = DocumentWalker::selector();

    let mut session = ChunkSession::new(config);
    for element in DocumentWalker::new(&document, &selector) {
        session.push(element);
    }
    let (chunks, stats) = session.finish();

    debug!(
        "Chunked document into {} chunks ({} blocks accepted, {} rejected, {} headings)",
        chunks.len(),
        stats.accepted,
        stats.rejected(),
        stats.headings
    );

    chunks
}
