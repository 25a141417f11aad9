//! Word-unscramble game engine.
//!
//! A [`RoundEngine`] presents scrambled words from a [`WordBank`], checks
//! guesses and keeps score until the round limit is reached. Hosts that need
//! to observe state changes wrap it in a [`GameSession`].

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod session;

pub use config::{Config, GameConfig};
pub use dictionary::WordBank;
pub use error::GameError;
pub use game::RoundEngine;
pub use models::{GameIntent, GamePhase, RoundState};
pub use session::GameSession;
