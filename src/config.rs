use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::{scorer::SCORE_INCREMENT, scrambler::MAX_SHUFFLE_ATTEMPTS};

/// Rounds per game when nothing else is configured
pub const DEFAULT_ROUND_LIMIT: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub words: WordsConfig,
    pub console: ConsoleConfig,
}

/// Rules a `RoundEngine` plays by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    pub round_limit: usize,
    pub score_increment: u32,
    pub max_shuffle_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_limit: DEFAULT_ROUND_LIMIT,
            score_increment: SCORE_INCREMENT,
            max_shuffle_attempts: MAX_SHUFFLE_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordsConfig {
    /// Word list file; the built-in bank is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsoleConfig {
    pub json_output: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = GameConfig::default();

        let game = GameConfig {
            round_limit: lookup("UNSCRAMBLE_ROUND_LIMIT")
                .unwrap_or_else(|| defaults.round_limit.to_string())
                .parse()
                .context("UNSCRAMBLE_ROUND_LIMIT must be a number")?,
            score_increment: lookup("UNSCRAMBLE_SCORE_INCREMENT")
                .unwrap_or_else(|| defaults.score_increment.to_string())
                .parse()
                .context("UNSCRAMBLE_SCORE_INCREMENT must be a number")?,
            max_shuffle_attempts: lookup("UNSCRAMBLE_MAX_SHUFFLE_ATTEMPTS")
                .unwrap_or_else(|| defaults.max_shuffle_attempts.to_string())
                .parse()
                .context("UNSCRAMBLE_MAX_SHUFFLE_ATTEMPTS must be a number")?,
        };

        let words = WordsConfig {
            path: lookup("UNSCRAMBLE_WORDS_PATH").filter(|path| !path.trim().is_empty()),
        };

        let console = ConsoleConfig {
            json_output: lookup("UNSCRAMBLE_JSON_OUTPUT")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .context("UNSCRAMBLE_JSON_OUTPUT must be true or false")?,
        };

        Ok(Config {
            game,
            words,
            console,
        })
    }
}
