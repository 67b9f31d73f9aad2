//! Presentation driver binding an engine to an opponent policy.
//!
//! A `Session` is what a UI holds: it forwards the human's button presses,
//! asks the policy for the opponent's reply, and exposes the configured
//! pause the UI waits before that reply. The pause is never applied here.

use std::time::Duration;

use log::debug;

use crate::core::{Actor, EngineError, GameRng, GameState, SessionConfig};
use crate::policy::{GreedyPrimePolicy, OpponentPolicy};
use crate::rules::{Engine, MoveOutcome};

/// One player-versus-computer session, spanning any number of games.
pub struct Session<P = GreedyPrimePolicy> {
    engine: Engine,
    policy: P,
    config: SessionConfig,
}

impl Session<GreedyPrimePolicy> {
    /// Create a session against the greedy prime opponent.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let policy = GreedyPrimePolicy::new(GameRng::from_seed_option(config.seed));
        Self::with_policy(config, policy)
    }
}

impl<P: OpponentPolicy> Session<P> {
    /// Create a session with a custom opponent policy.
    pub fn with_policy(config: SessionConfig, policy: P) -> Self {
        Self {
            engine: Engine::new(),
            policy,
            config,
        }
    }

    /// Read-only snapshot of the current game.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.engine.current_state()
    }

    /// Pause the UI should wait before calling `opponent_move`.
    #[must_use]
    pub fn opponent_delay(&self) -> Duration {
        self.config.opponent_delay
    }

    /// Check if the opponent should move next.
    #[must_use]
    pub fn is_opponent_turn(&self) -> bool {
        let state = self.engine.state();
        !state.is_finished() && state.active_actor == Actor::Opponent
    }

    /// Apply the human's chosen number.
    pub fn human_move(&mut self, addend: u32) -> Result<MoveOutcome, EngineError> {
        self.engine.apply_move(Actor::Human, addend)
    }

    /// Ask the policy for a number and apply it for the opponent.
    pub fn opponent_move(&mut self) -> Result<MoveOutcome, EngineError> {
        let addend = self.policy.choose_move(self.engine.state().current_sum);
        debug!("opponent policy chose {addend}");
        self.engine.apply_move(Actor::Opponent, addend)
    }

    /// Throw the current game away and start over.
    pub fn new_game(&mut self) -> GameState {
        self.engine.reset()
    }
}
