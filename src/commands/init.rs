use anyhow::{bail, Context, Result};
use recall_chunker::config::{Config, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

pub fn run(path: PathBuf) -> Result<()> {
    let config_path = path.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() {
        bail!("Config file already exists: {}", config_path.display());
    }

    let toml_content = format!("# recall-chunker configuration\n\n{}", Config::default().to_toml()?);

    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    std::fs::write(&config_path, toml_content)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;

    println!("Created configuration file: {}", config_path.display());
    Ok(())
}
