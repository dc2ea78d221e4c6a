//! Command-line interface for toe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against a random-move computer
#[derive(Parser, Debug)]
#[command(name = "toe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (player names, seed)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the random number generator (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}
