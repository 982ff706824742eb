/// Memory word game: new or old?
pub mod fade;
pub mod game;
pub mod pool;
pub mod renderer;
pub mod state;
pub mod words;

pub use game::{MemoryWordGame, Screen};
pub use state::{Choice, MemoryGame, MoveOutcome, Phase, RoundSummary, Rules};
