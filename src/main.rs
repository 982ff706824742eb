use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use memword::cli::Cli;
use memword::core::engine::Engine;
use memword::games::memory::{MemoryGame, MemoryWordGame};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    // 1. Settings and words
    let config = cli.load_config()?;
    let words = config.load_words()?;

    // 2. Build the round state and wrap it in its screens
    let state = MemoryGame::from_config(&config, words)?;
    let game = MemoryWordGame::new(state, config.fade_speed);
    info!(?config, "starting memword");

    // 3. Hand the terminal to the engine
    let terminal = ratatui::init();
    let game = Engine::new(game).run(terminal).await?;

    println!("👋 Thanks for playing! Best score: {}", game.best_score());
    Ok(())
}

/// The terminal belongs to the game, so logs only go to a file.
fn init_tracing(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
