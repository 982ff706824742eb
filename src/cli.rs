use clap::Parser;
use std::path::PathBuf;

use crate::core::config::GameConfig;
use crate::core::error::ConfigError;

#[derive(Parser, Debug)]
#[command(name = "memword")]
#[command(about = "🧠 A terminal memory game: has this word come up before?")]
#[command(version)]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Word list file, one word per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Lives at the start of a round
    #[arg(long)]
    pub lives: Option<u32>,

    /// Words sampled into each round
    #[arg(long)]
    pub pool_size: Option<usize>,

    /// Screen transition speed, 1 (fast) to 10 (slow)
    #[arg(long)]
    pub speed: Option<u32>,

    /// RNG seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Reads the config file, if any, and applies the flags on top.
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(words) = &self.words {
            config.words_file = Some(words.clone());
        }
        if let Some(lives) = self.lives {
            config.lives = lives;
        }
        if let Some(pool_size) = self.pool_size {
            config.pool_size = pool_size;
        }
        if let Some(speed) = self.speed {
            config.fade_speed = speed;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}
