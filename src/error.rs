use thiserror::Error;

/// Errors raised while setting up a game.
///
/// Gameplay itself never fails: wrong or blank guesses are reported through
/// [`RoundState::is_guess_wrong`](crate::models::RoundState::is_guess_wrong).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("word bank contains no usable words")]
    EmptyWordBank,

    #[error("round limit must be at least 1")]
    ZeroRoundLimit,

    #[error("round limit {round_limit} exceeds the {available} words in the word bank")]
    RoundLimitExceedsWordBank { round_limit: usize, available: usize },

    #[error("word '{0}' is not in the word bank")]
    UnknownWord(String),

    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
