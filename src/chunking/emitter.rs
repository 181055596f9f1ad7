//! Buffer to chunk conversion

use super::accumulator::ChunkBuffer;
use crate::types::Chunk;

/// Collects finished chunks in the order their buffers were opened
#[derive(Debug, Default)]
pub struct ChunkEmitter {
    chunks: Vec<Chunk>,
}

impl ChunkEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn a closed buffer into a chunk. Buffers without segments, or whose
    /// joined text is blank, produce nothing. Returns whether a chunk was emitted.
    pub fn finalize(&mut self, buffer: ChunkBuffer) -> bool {
        if buffer.segments.is_empty() {
            return false;
        }

        let content = buffer.segments.join(" ").trim().to_string();
        if content.is_empty() {
            return false;
        }

        self.chunks.push(Chunk {
            title: buffer.title,
            heading_level: buffer.heading_level,
            content,
            word_count: buffer.word_count,
        });
        true
    }

    pub fn into_chunks(self) -> Vec<Chunk> {
        self.chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(title: &str, level: u8, segments: &[&str], words: usize) -> ChunkBuffer {
        ChunkBuffer {
            title: title.to_string(),
            heading_level: level,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            word_count: words,
        }
    }

    #[test]
    fn test_empty_buffer_discarded() {
        let mut emitter = ChunkEmitter::new();
        assert!(!emitter.finalize(ChunkBuffer::default()));
        assert!(emitter.into_chunks().is_empty());
    }

    #[test]
    fn test_blank_segments_discarded() {
        let mut emitter = ChunkEmitter::new();
        assert!(!emitter.finalize(buffer("T", 1, &["  ", ""], 0)));
        assert!(emitter.into_chunks().is_empty());
    }

    #[test]
    fn test_segments_joined_with_single_space() {
        let mut emitter = ChunkEmitter::new();
        assert!(emitter.finalize(buffer("Intro", 1, &["first part", "second part"], 4)));
        let chunks = emitter.into_chunks();
        assert_eq!(
            chunks,
            vec![Chunk {
                title: "Intro".to_string(),
                heading_level: 1,
                content: "first part second part".to_string(),
                word_count: 4,
            }]
        );
    }

    #[test]
    fn test_emission_order() {
        let mut emitter = ChunkEmitter::new();
        emitter.finalize(buffer("A", 1, &["alpha words"], 2));
        emitter.finalize(buffer("B", 2, &["beta words"], 2));
        let titles: Vec<_> = emitter.into_chunks().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }
}
