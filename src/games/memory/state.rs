//! Round state for the memory word game.
//!
//! [`MemoryGame`] owns the word pool, score, lives and the record of words
//! already shown. It knows nothing about screens or keys: the input layer
//! calls [`MemoryGame::play`] (or the individual operations) and renders
//! whatever the accessors report.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use tracing::{debug, info};

use super::pool::draw_pool;
use super::words::normalize;
use crate::core::config::GameConfig;
use crate::core::error::{ConfigError, GameError};

/// The player's classification of the word on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    New,
    Old,
}

impl Choice {
    /// Accepts `"new"` / `"old"` (any case) and their first letters.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "new" | "n" => Some(Choice::New),
            "old" | "o" => Some(Choice::Old),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, `init` not yet called.
    Uninitialized,
    /// A round is in progress.
    Active,
    /// The last round finished; waiting for `init(true)`.
    Ended,
}

/// Fixed numbers of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub lives: u32,
    pub pool_size: usize,
    pub score_step: u32,
    pub life_step: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for Rules {
    fn from(config: &GameConfig) -> Self {
        Self {
            lives: config.lives,
            pool_size: config.pool_size,
            score_step: config.score_step,
            life_step: config.life_step,
        }
    }
}

/// What a finished round leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub final_score: u32,
    /// Distinct words recorded as shown during the round.
    pub words_seen: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The round goes on with `next_word` on screen.
    Continue { correct: bool, next_word: String },
    /// Lives hit zero. The game is [`Phase::Ended`] with the final score
    /// and lives still readable until [`MemoryGame::reset_game`] is called.
    RoundOver(RoundSummary),
}

pub struct MemoryGame<R = StdRng> {
    rules: Rules,
    source: Vec<String>,
    pool: Vec<String>,
    score: u32,
    lives: u32,
    used_words: HashMap<String, u32>,
    current_word: Option<String>,
    phase: Phase,
    rounds_played: u32,
    rng: R,
}

impl MemoryGame<StdRng> {
    /// Builds a game from a validated config, seeding the RNG from
    /// `config.seed` when present.
    pub fn from_config(config: &GameConfig, source: Vec<String>) -> Result<Self, ConfigError> {
        let source = normalize(source);
        config.validate(source.len())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::new(Rules::from(config), source, rng))
    }
}

impl<R: Rng> MemoryGame<R> {
    pub fn new(rules: Rules, source: Vec<String>, rng: R) -> Self {
        Self {
            rules,
            source: normalize(source),
            pool: Vec::new(),
            score: 0,
            lives: rules.lives,
            used_words: HashMap::new(),
            current_word: None,
            phase: Phase::Uninitialized,
            rounds_played: 0,
            rng,
        }
    }

    /// Resets score, lives and the used-word record.
    ///
    /// With `new_round` a fresh pool is drawn and a first word picked, and
    /// the game becomes [`Phase::Active`]. Without it the pool and current
    /// word are discarded and the game waits in [`Phase::Ended`].
    pub fn init(&mut self, new_round: bool) -> Result<(), GameError> {
        self.score = 0;
        self.lives = self.rules.lives;
        self.used_words.clear();
        self.current_word = None;
        self.pool.clear();
        self.phase = Phase::Ended;

        if !new_round {
            return Ok(());
        }

        let pool = draw_pool(&self.source, self.rules.pool_size, &mut self.rng)?;
        if pool.is_empty() {
            return Err(GameError::EmptyPool);
        }
        self.pool = pool;
        self.phase = Phase::Active;
        let first = self.get_random_word()?;
        info!(pool_size = self.pool.len(), first_word = %first, "round started");
        self.current_word = Some(first);
        Ok(())
    }

    /// A uniformly random word of the pool, lowercased. May equal the word
    /// currently shown; see [`Self::next_word`].
    pub fn get_random_word(&mut self) -> Result<String, GameError> {
        self.ensure_active()?;
        if self.pool.is_empty() {
            return Err(GameError::EmptyPool);
        }
        let index = self.rng.random_range(0..self.pool.len());
        Ok(self.pool[index].to_lowercase())
    }

    /// Like [`Self::get_random_word`] but never repeats the current word,
    /// unless the pool has nothing else to offer.
    pub fn next_word(&mut self) -> Result<String, GameError> {
        let mut word = self.get_random_word()?;
        let Some(current) = self.current_word.clone() else {
            return Ok(word);
        };
        if !self.pool.iter().any(|w| !w.eq_ignore_ascii_case(&current)) {
            return Ok(word);
        }
        while word == current {
            word = self.get_random_word()?;
        }
        Ok(word)
    }

    pub fn is_new_word(&self, word: &str) -> bool {
        !self.is_duplicate_word(word)
    }

    pub fn is_duplicate_word(&self, word: &str) -> bool {
        self.used_words.contains_key(&word.to_lowercase())
    }

    /// Records `word` as shown and returns how many times it has been.
    pub fn add_used_word(&mut self, word: &str) -> Result<u32, GameError> {
        self.ensure_active()?;
        let count = self.used_words.entry(word.to_lowercase()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    pub fn increment_score_by_amount(&mut self, amount: u32) -> Result<u32, GameError> {
        self.ensure_active()?;
        ensure_positive(amount)?;
        self.score = self.score.saturating_add(amount);
        Ok(self.score)
    }

    /// Lives stop at zero.
    pub fn reduce_lives_by_amount(&mut self, amount: u32) -> Result<u32, GameError> {
        self.ensure_active()?;
        ensure_positive(amount)?;
        self.lives = self.lives.saturating_sub(amount);
        Ok(self.lives)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn max_lives(&self) -> u32 {
        self.rules.lives
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_word(&self) -> Option<&str> {
        self.current_word.as_deref()
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn used_count(&self, word: &str) -> u32 {
        self.used_words
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Puts a specific pool word on screen.
    pub fn present_word(&mut self, word: &str) -> Result<(), GameError> {
        if self.phase != Phase::Active {
            return Err(GameError::InvalidState("no round in progress"));
        }
        let word = word.to_lowercase();
        if !self.pool.contains(&word) {
            return Err(GameError::InvalidArgument(format!(
                "'{word}' is not in the round's pool"
            )));
        }
        self.current_word = Some(word);
        Ok(())
    }

    /// One full turn: judge `choice` against the word on screen, adjust
    /// score or lives, record the word and move on to a different one.
    /// When lives run out the round ends and its summary is returned; the
    /// caller resets it with [`Self::reset_game`] once the player has seen it.
    pub fn play(&mut self, choice: Choice) -> Result<MoveOutcome, GameError> {
        self.ensure_active()?;
        let current = self
            .current_word
            .clone()
            .ok_or(GameError::InvalidState("no word on screen"))?;
        let next_word = self.next_word()?;

        let correct = match choice {
            Choice::New => self.is_new_word(&current),
            Choice::Old => self.is_duplicate_word(&current),
        };
        if correct {
            self.increment_score_by_amount(self.rules.score_step)?;
        } else {
            self.reduce_lives_by_amount(self.rules.life_step)?;
        }
        debug!(
            word = %current,
            ?choice,
            correct,
            score = self.score,
            lives = self.lives,
            "move played"
        );

        self.add_used_word(&current)?;

        if self.lives == 0 {
            self.phase = Phase::Ended;
            let summary = self.summary();
            info!(
                final_score = summary.final_score,
                words_seen = summary.words_seen,
                "round over"
            );
            return Ok(MoveOutcome::RoundOver(summary));
        }

        self.current_word = Some(next_word.clone());
        Ok(MoveOutcome::Continue { correct, next_word })
    }

    /// Ends the round: captures the final score, then reinitializes with
    /// `init(false)`. Showing the end screen is the caller's business.
    pub fn reset_game(&mut self) -> Result<RoundSummary, GameError> {
        if self.phase == Phase::Uninitialized {
            return Err(GameError::InvalidState("init has not been called"));
        }
        let summary = self.summary();
        self.rounds_played += 1;
        info!(round = self.rounds_played, "round reset");
        self.init(false)?;
        Ok(summary)
    }

    fn summary(&self) -> RoundSummary {
        RoundSummary {
            final_score: self.score,
            words_seen: self.used_words.len(),
        }
    }

    /// Sampling and scoring only make sense mid-round.
    fn ensure_active(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Active => Ok(()),
            Phase::Uninitialized => Err(GameError::InvalidState("init has not been called")),
            Phase::Ended => Err(GameError::InvalidState("no round in progress")),
        }
    }
}

fn ensure_positive(amount: u32) -> Result<(), GameError> {
    if amount == 0 {
        return Err(GameError::InvalidArgument(
            "adjustment amount must be positive".to_string(),
        ));
    }
    Ok(())
}
