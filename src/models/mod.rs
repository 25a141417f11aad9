pub mod game;

pub use game::{GameIntent, GamePhase, RoundState};
