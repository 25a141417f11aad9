// Round engine and the rules it is built from

pub mod engine;
pub mod scorer;
pub mod scrambler;
pub mod validator;

pub use engine::RoundEngine;
pub use scorer::Scorer;
pub use scrambler::Scrambler;
pub use validator::GuessValidator;
