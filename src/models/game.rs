use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Immutable snapshot of a game, produced after every intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Letters of the current word in a shuffled order
    pub scrambled_word: String,
    /// 1-indexed count of words presented this game
    pub round_number: u32,
    pub score: u32,
    /// Set by a rejected guess, cleared by editing the guess or advancing
    pub is_guess_wrong: bool,
    pub is_game_over: bool,
}

impl RoundState {
    /// State at the start of a game
    pub fn first_round(scrambled_word: String) -> Self {
        Self {
            scrambled_word,
            round_number: 1,
            score: 0,
            is_guess_wrong: false,
            is_game_over: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }
}

/// Player intents a host forwards to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameIntent {
    UpdateGuess { text: String },
    SubmitGuess,
    Skip,
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_round_defaults() {
        let state = RoundState::first_round("tac".to_string());
        assert_eq!(state.round_number, 1);
        assert_eq!(state.score, 0);
        assert!(!state.is_guess_wrong);
        assert_eq!(state.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_phase_follows_game_over_flag() {
        let state = RoundState {
            is_game_over: true,
            ..RoundState::first_round("god".to_string())
        };
        assert_eq!(state.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_intent_wire_format() {
        let intent = GameIntent::UpdateGuess {
            text: "cat".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&intent).unwrap(),
            r#"{"type":"update_guess","text":"cat"}"#
        );

        let parsed: GameIntent = serde_json::from_str(r#"{"type":"submit_guess"}"#).unwrap();
        assert_eq!(parsed, GameIntent::SubmitGuess);
    }

    #[test]
    fn test_snapshot_serializes_snake_case() {
        let value = serde_json::to_value(RoundState::first_round("tna".to_string())).unwrap();
        assert_eq!(value["scrambled_word"], "tna");
        assert_eq!(value["round_number"], 1);
        assert_eq!(value["is_game_over"], false);
    }
}
