//! recall-chunker: heading-aware chunking of recall-extracted HTML
//!
//! Raw HTML goes through an external noise-reduction step, then the cleaned
//! markup is split into ordered chunks:
//! - Headings set the title and level of the chunks that follow them
//! - Short, sparse, or repeated blocks are dropped
//! - Chunks stay under a soft word budget without cutting blocks

pub mod chunker;
pub mod chunking;
pub mod config;
pub mod extraction;
pub mod types;

pub use chunker::HtmlChunker;
pub use chunking::chunk_html;
pub use config::Config;
pub use extraction::{ExtractError, Extractor, OutputFormat, PassthroughExtractor, ProcessExtractor};
pub use types::*;
