pub struct GuessValidator;

impl GuessValidator {
    /// Normalize raw input into a stored guess
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_string()
    }

    pub fn is_blank(guess: &str) -> bool {
        guess.trim().is_empty()
    }

    /// Check a guess against the answer, ignoring case
    pub fn matches(guess: &str, answer: &str) -> bool {
        if Self::is_blank(guess) {
            return false;
        }
        guess.to_lowercase() == answer.to_lowercase()
    }
}
