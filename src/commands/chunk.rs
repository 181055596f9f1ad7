use super::read_input;
use crate::OutputStyle;
use anyhow::Result;
use recall_chunker::{config::Config, types::Chunk, HtmlChunker};
use std::path::PathBuf;
use tracing::info;

pub async fn run(
    config: Config,
    path: PathBuf,
    max_words: Option<i64>,
    pre_cleaned: bool,
    output: OutputStyle,
) -> Result<()> {
    let html = read_input(&path)?;

    let chunker = if pre_cleaned {
        HtmlChunker::pre_cleaned(&config)
    } else {
        HtmlChunker::from_config(&config)
    };

    let max_words = max_words.unwrap_or(chunker.config().max_words);
    let chunks = chunker.chunk_with_max_words(&html, max_words).await?;
    info!(
        "{}: {} chunks via {} extractor (max {} words)",
        path.display(),
        chunks.len(),
        chunker.extractor_name(),
        max_words
    );

    print_chunks(&chunks, output)
}

fn print_chunks(chunks: &[Chunk], output: OutputStyle) -> Result<()> {
    match output {
        OutputStyle::Json => println!("{}", serde_json::to_string_pretty(chunks)?),
        OutputStyle::Jsonl => {
            for chunk in chunks {
                println!("{}", serde_json::to_string(chunk)?);
            }
        }
        OutputStyle::Text => {
            for (i, chunk) in chunks.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", chunk);
            }
        }
    }
    Ok(())
}
