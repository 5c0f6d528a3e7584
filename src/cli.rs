//! Command-line interface definitions using clap

use clap::Parser;

/// Linkdeck - a terminal board of link cards
#[derive(Parser, Debug)]
#[command(name = "linkdeck")]
#[command(version)]
#[command(about = "A terminal board of link cards", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml, optional)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<String>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub generate_config: bool,

    /// URLs to add as cards on startup
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,
}
