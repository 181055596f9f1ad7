//! Subprocess-backed extractor
//!
//! Writes the raw HTML to a scratch file, runs the extractor script on it and
//! reads the result from stdout. The scratch file is removed when the guard
//! drops, so every exit path cleans up.

use super::{ExtractError, ExtractResult, Extractor, OutputFormat};
use crate::config::ExtractorConfig;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// What the script prints when it found nothing to extract
const EMPTY_MARKER: &str = "None";

/// Runs `program args.. <scratch-file> <format>`
#[derive(Debug, Clone)]
pub struct ProcessExtractor {
    program: String,
    args: Vec<String>,
}

impl ProcessExtractor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    /// Strip the trailing newline and map the empty marker to an empty string
    fn normalize_output(stdout: &str) -> String {
        let text = stdout.trim_end_matches(['\n', '\r']);
        if text.trim() == EMPTY_MARKER {
            String::new()
        } else {
            text.to_string()
        }
    }
}

impl Default for ProcessExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}

#[async_trait]
impl Extractor for ProcessExtractor {
    async fn extract(&self, raw_html: &str, format: OutputFormat) -> ExtractResult<String> {
        let scratch = tokio::task::spawn_blocking(|| {
            tempfile::Builder::new()
                .prefix("recall-")
                .suffix(".html")
                .tempfile()
        })
        .await
        .map_err(|e| ExtractError::Other(e.into()))??;
        tokio::fs::write(scratch.path(), raw_html).await?;

        info!(
            "Running extractor {} on {} bytes (format: {})",
            self.program,
            raw_html.len(),
            format
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(scratch.path())
            .arg(format.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            warn!(
                "Extractor {} exited with {:?}: {}",
                self.program,
                output.status.code(),
                stderr
            );
            return Err(ExtractError::ProcessFailed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr,
            });
        }

        if !stderr.is_empty() {
            debug!("Extractor stderr:\n{}", stderr);
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| ExtractError::InvalidOutput(e.to_string()))?;
        let content = Self::normalize_output(&stdout);

        debug!("Extractor returned {} bytes", content.len());
        Ok(content)
    }

    fn name(&self) -> &str {
        "process"
    }
}
