use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::Rng;
use tokio::sync::watch;

use crate::{
    game::RoundEngine,
    models::{GameIntent, RoundState},
};

/// Shared, observable wrapper around a [`RoundEngine`].
///
/// Intents are serialized through a single lock. Each snapshot that differs
/// from the previous one is published to every subscriber.
pub struct GameSession<R: Rng = rand::rngs::StdRng> {
    engine: Mutex<RoundEngine<R>>,
    tx: watch::Sender<RoundState>,
}

impl<R: Rng> GameSession<R> {
    pub fn new(engine: RoundEngine<R>) -> Self {
        let (tx, _rx) = watch::channel(engine.state().clone());
        Self {
            engine: Mutex::new(engine),
            tx,
        }
    }

    /// Receiver that sees the latest snapshot and every later change
    pub fn subscribe(&self) -> watch::Receiver<RoundState> {
        self.tx.subscribe()
    }

    /// Apply an intent and publish the result if it changed anything
    pub fn dispatch(&self, intent: GameIntent) -> RoundState {
        // Publish under the engine lock so the channel never falls behind the engine
        let mut engine = self.lock();
        let state = engine.apply(intent);

        let published = self.tx.send_if_modified(|current| {
            if *current == state {
                return false;
            }
            *current = state.clone();
            true
        });
        drop(engine);

        if published {
            tracing::debug!(
                "Published round {} (score {}, game over: {})",
                state.round_number,
                state.score,
                state.is_game_over
            );
        }

        state
    }

    pub fn snapshot(&self) -> RoundState {
        self.lock().state().clone()
    }

    pub fn current_guess(&self) -> String {
        self.lock().current_guess().to_string()
    }

    // Engine operations are total, so a panicking holder cannot leave it half-updated
    fn lock(&self) -> MutexGuard<'_, RoundEngine<R>> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
