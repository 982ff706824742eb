use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::error::ConfigError;

pub const DEFAULT_LIVES: u32 = 3;
pub const DEFAULT_POOL_SIZE: usize = 20;
pub const DEFAULT_FADE_SPEED: u32 = 3;
pub const MIN_FADE_SPEED: u32 = 1;
pub const MAX_FADE_SPEED: u32 = 10;

/// Tunables for a game session.
///
/// Loaded from an optional JSON file; every field has a default, so
/// `{}` is a valid config. CLI flags are applied on top.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Lives at the start of each round.
    pub lives: u32,
    /// Number of words sampled into a round's pool.
    pub pool_size: usize,
    /// Points gained per correct answer.
    pub score_step: u32,
    /// Lives lost per wrong answer.
    pub life_step: u32,
    /// Screen transition speed, 1 (fast) to 10 (slow).
    pub fade_speed: u32,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
    /// Plain-text word list replacing the built-in one.
    pub words_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lives: DEFAULT_LIVES,
            pool_size: DEFAULT_POOL_SIZE,
            score_step: 1,
            life_step: 1,
            fade_speed: DEFAULT_FADE_SPEED,
            seed: None,
            words_file: None,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Checks the values against each other and against the size of the
    /// word list the game will sample from.
    pub fn validate(&self, source_len: usize) -> Result<(), ConfigError> {
        if self.lives == 0 {
            return Err(invalid("lives", "must be at least 1"));
        }
        if self.score_step == 0 {
            return Err(invalid("score_step", "must be at least 1"));
        }
        if self.life_step == 0 {
            return Err(invalid("life_step", "must be at least 1"));
        }
        if self.pool_size < 2 {
            return Err(invalid("pool_size", "must be at least 2"));
        }
        if self.pool_size > source_len {
            return Err(ConfigError::Invalid {
                field: "pool_size",
                reason: format!(
                    "{} exceeds the {} words available",
                    self.pool_size, source_len
                ),
            });
        }
        if !(MIN_FADE_SPEED..=MAX_FADE_SPEED).contains(&self.fade_speed) {
            return Err(ConfigError::Invalid {
                field: "fade_speed",
                reason: format!("must be between {MIN_FADE_SPEED} and {MAX_FADE_SPEED}"),
            });
        }
        Ok(())
    }

    /// Loads the word list this config points at, or the built-in one.
    pub fn load_words(&self) -> Result<Vec<String>, ConfigError> {
        match &self.words_file {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                Ok(crate::games::memory::words::parse_word_list(&text))
            }
            None => Ok(crate::games::memory::words::default_words()),
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
