//! Toe - console tic-tac-toe against a random-move computer.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use rand::SeedableRng;
use rand::rngs::StdRng;
use toe::{GameConfig, HumanPlayer, RandomPlayer, Session};
use toe_rules::GameState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Game text owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_seed(cli.seed);

    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let state = GameState::random(&mut rng);
    info!(first = %state.turn().kind(), "Starting game");

    let human = HumanPlayer::new(std::io::stdin().lock());
    let computer = RandomPlayer::with_max_attempts(rng, *config.max_random_attempts());
    let mut session = Session::new(state, config.roster(), human, computer, std::io::stdout());

    // Game play has no failing exit path.
    if let Err(e) = session.run() {
        error!(error = %e, "Session ended before the game finished");
    }
    Ok(())
}
