use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use homebound::GameState;

fn init_tracing() {
    // stdout is the game transcript; diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut game = GameState::bundled().context("failed to load the bundled world")?;

    homebound::run(&mut game, io::stdin().lock(), io::stdout().lock())
        .context("failed to write to the terminal")
}
