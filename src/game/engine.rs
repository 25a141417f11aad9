use std::collections::HashSet;

use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};

use crate::{
    config::GameConfig,
    dictionary::WordBank,
    error::{GameError, Result},
    game::{scorer::Scorer, scrambler::Scrambler, validator::GuessValidator},
    models::{GameIntent, RoundState},
};

/// State machine for one unscramble game session.
///
/// Every intent applies immediately and returns the resulting snapshot.
/// The engine has no internal synchronization; wrap it in a
/// [`GameSession`](crate::session::GameSession) to share it.
#[derive(Debug)]
pub struct RoundEngine<R: Rng = StdRng> {
    bank: WordBank,
    rules: GameConfig,
    scorer: Scorer,
    rng: R,
    state: RoundState,
    /// Unscrambled answer for the active round
    current_word: String,
    /// Words presented this game, never more than `rules.round_limit`
    used_words: HashSet<String>,
    current_guess: String,
}

impl RoundEngine<StdRng> {
    /// Start a game with an OS-seeded RNG
    pub fn new(bank: WordBank, rules: GameConfig) -> Result<Self> {
        Self::with_rng(bank, rules, StdRng::from_os_rng())
    }
}

impl<R: Rng> RoundEngine<R> {
    /// Start a game drawing words and shuffles from `rng`
    pub fn with_rng(bank: WordBank, rules: GameConfig, rng: R) -> Result<Self> {
        Self::validate(&bank, &rules)?;
        let mut engine = Self::unstarted(bank, rules, rng);
        engine.reset();
        Ok(engine)
    }

    /// Start a game whose first round presents `word`.
    ///
    /// Later rounds draw at random as usual. Fails if `word` is not in the bank.
    pub fn starting_with(bank: WordBank, rules: GameConfig, rng: R, word: &str) -> Result<Self> {
        Self::validate(&bank, &rules)?;
        let index = bank
            .position(word)
            .ok_or_else(|| GameError::UnknownWord(word.to_string()))?;

        let mut engine = Self::unstarted(bank, rules, rng);
        let first = engine.bank.words()[index].clone();
        let scrambled = engine.present(first);
        engine.state = RoundState::first_round(scrambled);
        Ok(engine)
    }

    fn validate(bank: &WordBank, rules: &GameConfig) -> Result<()> {
        if rules.round_limit == 0 {
            return Err(GameError::ZeroRoundLimit);
        }
        if rules.round_limit > bank.len() {
            return Err(GameError::RoundLimitExceedsWordBank {
                round_limit: rules.round_limit,
                available: bank.len(),
            });
        }
        Ok(())
    }

    fn unstarted(bank: WordBank, rules: GameConfig, rng: R) -> Self {
        Self {
            scorer: Scorer::new(rules.score_increment),
            used_words: HashSet::with_capacity(rules.round_limit),
            bank,
            rules,
            rng,
            state: RoundState::first_round(String::new()),
            current_word: String::new(),
            current_guess: String::new(),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// The trimmed guess as last entered
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    pub fn rules(&self) -> &GameConfig {
        &self.rules
    }

    /// Dispatch a serialized intent
    pub fn apply(&mut self, intent: GameIntent) -> RoundState {
        match intent {
            GameIntent::UpdateGuess { text } => self.update_guess(&text),
            GameIntent::SubmitGuess => self.submit_guess(),
            GameIntent::Skip => self.skip(),
            GameIntent::Reset => self.reset(),
        }
    }

    /// Store the trimmed guess. Typing something clears a previous wrong flag.
    pub fn update_guess(&mut self, text: &str) -> RoundState {
        if self.ignored_after_game_over("update_guess") {
            return self.state.clone();
        }

        let guess = GuessValidator::normalize(text);
        if self.state.is_guess_wrong && !guess.is_empty() {
            self.state.is_guess_wrong = false;
        }
        self.current_guess = guess;

        self.state.clone()
    }

    /// Check the stored guess against the current word.
    ///
    /// A match scores and moves to the next round. Anything else, blank
    /// included, flags the guess as wrong and keeps the round, except that a
    /// wrong non-blank guess on the final round ends the game.
    pub fn submit_guess(&mut self) -> RoundState {
        if self.ignored_after_game_over("submit_guess") {
            return self.state.clone();
        }

        if GuessValidator::is_blank(&self.current_guess) {
            self.state.is_guess_wrong = true;
        } else if GuessValidator::matches(&self.current_guess, &self.current_word) {
            let score = self.scorer.award(self.state.score);
            tracing::debug!(
                "Round {} solved, score {} -> {}",
                self.state.round_number,
                self.state.score,
                score
            );
            self.advance(score);
        } else {
            self.state.is_guess_wrong = true;
            if self.on_final_round() {
                self.finish();
            }
        }

        self.current_guess.clear();
        self.state.clone()
    }

    /// Move to the next round without scoring
    pub fn skip(&mut self) -> RoundState {
        if self.ignored_after_game_over("skip") {
            return self.state.clone();
        }

        tracing::debug!("Round {} skipped", self.state.round_number);
        self.advance(self.state.score);
        self.current_guess.clear();
        self.state.clone()
    }

    /// Start over with a fresh word, zero score and round 1
    pub fn reset(&mut self) -> RoundState {
        self.used_words.clear();
        self.current_guess.clear();
        let scrambled = self.draw_word();
        self.state = RoundState::first_round(scrambled);

        tracing::debug!(
            "New game: {} rounds from {} words",
            self.rules.round_limit,
            self.bank.len()
        );

        self.state.clone()
    }

    fn advance(&mut self, score: u32) {
        self.state.score = score;
        self.state.is_guess_wrong = false;

        if self.on_final_round() {
            self.finish();
        } else {
            self.state.scrambled_word = self.draw_word();
            self.state.round_number += 1;
        }
    }

    fn finish(&mut self) {
        self.state.is_game_over = true;
        tracing::info!(
            "Game over after {} rounds with score {}",
            self.state.round_number,
            self.state.score
        );
    }

    fn on_final_round(&self) -> bool {
        self.used_words.len() >= self.rules.round_limit
    }

    fn ignored_after_game_over(&self, intent: &str) -> bool {
        if self.state.is_game_over {
            tracing::debug!("Ignoring {} after game over", intent);
        }
        self.state.is_game_over
    }

    /// Pick an unused word at random and return it scrambled
    fn draw_word(&mut self) -> String {
        let available: Vec<&String> = self
            .bank
            .words()
            .iter()
            .filter(|word| !self.used_words.contains(*word))
            .collect();

        // round_limit <= bank size is checked at construction, so a word is always left
        let word = available
            .choose(&mut self.rng)
            .map(|word| (*word).clone())
            .unwrap_or_default();
        self.present(word)
    }

    fn present(&mut self, word: String) -> String {
        let scrambled = Scrambler::scramble(&word, self.rules.max_shuffle_attempts, &mut self.rng);
        self.used_words.insert(word.clone());
        self.current_word = word;
        scrambled
    }
}
