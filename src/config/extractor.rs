//! Extractor process configuration

use serde::{Deserialize, Serialize};

/// How to launch the external extractor.
///
/// The command line is `program args.. <input-file> <format>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Executable to run
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the input path, typically the script path
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_program() -> String {
    "python3".to_string()
}

fn default_args() -> Vec<String> {
    vec!["extract-recall.py".to_string()]
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}
