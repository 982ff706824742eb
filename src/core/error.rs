use thiserror::Error;

/// Errors raised by the game-state module when it is driven incorrectly.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("The word pool is empty")]
    EmptyPool,
    #[error("Cannot draw {requested} words from a list of {available}")]
    PoolTooLarge { requested: usize, available: usize },
}

/// Errors raised while loading or validating the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
