//! recall-chunker: heading-aware chunking of recall-extracted HTML

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recall_chunker::config::{Config, LogFormat, LoggingConfig, DEFAULT_CONFIG_FILE};
use recall_chunker::extraction::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "recall-chunker")]
#[command(about = "Split recall-extracted HTML into heading-aware chunks")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk an HTML file
    Chunk {
        /// Path to the HTML file
        path: PathBuf,

        /// Soft word ceiling per chunk (defaults to the config value)
        #[arg(short, long, allow_hyphen_values = true)]
        max_words: Option<i64>,

        /// Input is already cleaned; skip the extractor
        #[arg(long)]
        pre_cleaned: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        output: OutputStyle,
    },

    /// Run only the extractor and print its output (nothing when it found no content)
    Extract {
        /// Path to the HTML file
        path: PathBuf,

        /// Output format (html, txt)
        format: OutputFormat,
    },

    /// Write a default configuration file
    Init {
        /// Output directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// How chunks are printed
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputStyle {
    /// Pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
    /// Human-readable sections
    Text,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config if present
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    init_logging(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Chunk {
            path,
            max_words,
            pre_cleaned,
            output,
        } => commands::chunk::run(config, path, max_words, pre_cleaned, output).await,
        Commands::Extract { path, format } => commands::extract::run(config, path, format).await,
        Commands::Init { path } => commands::init::run(path),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for chunk output.
fn init_logging(logging: &LoggingConfig, verbose: u8) -> Result<()> {
    let level = logging.level.raised(verbose).to_tracing();
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish())?,
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
    }
    Ok(())
}
