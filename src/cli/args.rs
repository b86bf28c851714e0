use std::path::PathBuf;

use clap::Parser;

/// Gemini Doctor - validate a locally stored Gemini API credential
#[derive(Parser)]
#[command(name = "gemini-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (defaults to config.yaml next to the executable)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
