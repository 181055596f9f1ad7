//! Configuration for recall-chunker

mod chunking;
mod extractor;
mod logging;

pub use chunking::ChunkingConfig;
pub use extractor::ExtractorConfig;
pub use logging::{LogFormat, LogLevel, LoggingConfig};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name written by `init` and looked up by default
pub const DEFAULT_CONFIG_FILE: &str = "recall-chunker.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chunking thresholds and word budget
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// External extractor process
    #[serde(default)]
    pub extractor: ExtractorConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate all configuration fields.
    ///
    /// Collects every error and reports them together. The word budget is not
    /// checked: zero and negative budgets are valid.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        // Extractor validation
        if self.extractor.program.trim().is_empty() {
            errors.push("extractor program must not be empty".to_string());
        }
        if self.extractor.args.iter().any(|arg| arg.is_empty()) {
            errors.push("extractor args must not contain empty strings".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }
    }
}
