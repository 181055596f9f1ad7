pub mod chunk;
pub mod extract;
pub mod init;

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Read an input document, distinguishing a missing path from a non-file
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    if !path.is_file() {
        bail!("Path is not a file: {}", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("Error reading file: {}", path.display()))
}
