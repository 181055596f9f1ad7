use super::read_input;
use anyhow::Result;
use recall_chunker::{
    config::Config,
    extraction::{Extractor, OutputFormat, ProcessExtractor},
};
use std::io::Write;
use std::path::PathBuf;

pub async fn run(config: Config, path: PathBuf, format: OutputFormat) -> Result<()> {
    let html = read_input(&path)?;
    let extractor = ProcessExtractor::from_config(&config.extractor);
    let extracted = extractor.extract(&html, format).await?;
    write_extracted(&mut std::io::stdout().lock(), &extracted)
}

/// Print extracted content. Empty content prints nothing at all.
fn write_extracted(out: &mut impl Write, extracted: &str) -> Result<()> {
    if !extracted.is_empty() {
        writeln!(out, "{}", extracted)?;
    }
    Ok(())
}
