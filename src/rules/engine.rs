//! The game engine: validates and applies moves, scores primes, detects the win.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{
    is_valid_addend, Actor, ActorMap, EngineError, GameState, GameStatus, LogEntry, TARGET_SCORE,
};
use crate::primality::is_prime;

/// Snapshot returned by a successful move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Running sum after the move.
    pub current_sum: u32,

    /// Scores after the move.
    pub scores: ActorMap<u32>,

    /// Whose turn it is now. Unchanged if the move ended the game.
    pub active_actor: Actor,

    /// Status after the move.
    pub status: GameStatus,

    /// The log entry this move produced.
    pub entry: LogEntry,
}

/// Owns the game state and is its only writer.
///
/// ## Example
///
/// ```
/// use prime_race::core::{Actor, GameStatus};
/// use prime_race::rules::Engine;
///
/// let mut engine = Engine::new();
///
/// let outcome = engine.apply_move(Actor::Human, 3).unwrap();
/// assert_eq!(outcome.current_sum, 3);
/// assert_eq!(outcome.scores[Actor::Human], 3); // 3 is prime
/// assert_eq!(outcome.active_actor, Actor::Opponent);
/// assert_eq!(outcome.status, GameStatus::InProgress);
///
/// // Out of turn: rejected, nothing changes
/// assert!(engine.apply_move(Actor::Human, 1).is_err());
/// assert_eq!(engine.current_state().current_sum, 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Create an engine at the start of a fresh game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Read-only snapshot of the current state.
    #[must_use]
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    /// Borrow the current state without cloning.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Discard the current game and start a new one.
    pub fn reset(&mut self) -> GameState {
        info!(
            "new game (previous: {} moves, status {:?})",
            self.state.move_count(),
            self.state.status
        );
        self.state = GameState::new();
        self.current_state()
    }

    /// Apply `actor` adding `addend` to the running sum.
    ///
    /// If the new sum is prime the mover scores that many points. The win
    /// check runs on the mover's just-updated score; on a win the status
    /// becomes `Finished` and the turn does not pass.
    ///
    /// ## Errors
    ///
    /// Checked in this order, and nothing is mutated on failure:
    /// - `GameAlreadyFinished` if the game has ended
    /// - `NotYourTurn` if `actor` is not the active actor
    /// - `InvalidAddend` if `addend` is outside 1..=5
    /// - `SumOverflow` if the new sum does not fit in a `u32`
    pub fn apply_move(&mut self, actor: Actor, addend: u32) -> Result<MoveOutcome, EngineError> {
        let resulting_sum = match self.validate(actor, addend) {
            Ok(sum) => sum,
            Err(err) => {
                warn!("rejected move {addend} by {actor}: {err}");
                return Err(err);
            }
        };

        let scored = is_prime(i64::from(resulting_sum));
        let entry = LogEntry {
            actor,
            amount_added: addend,
            resulting_sum,
            scored,
            points_awarded: if scored { resulting_sum } else { 0 },
        };
        self.state.record(entry);

        debug!(
            "{actor} added {addend}: sum {resulting_sum}, {} points, score {}",
            entry.points_awarded,
            self.state.score(actor)
        );

        if self.state.score(actor) >= TARGET_SCORE {
            self.state.status = GameStatus::Finished { winner: actor };
            info!("{actor} wins with {} points", self.state.score(actor));
        } else {
            self.state.active_actor = actor.other();
        }

        Ok(MoveOutcome {
            current_sum: self.state.current_sum,
            scores: self.state.scores.clone(),
            active_actor: self.state.active_actor,
            status: self.state.status,
            entry,
        })
    }

    /// Check the move and return the sum it would produce.
    fn validate(&self, actor: Actor, addend: u32) -> Result<u32, EngineError> {
        if let GameStatus::Finished { winner } = self.state.status {
            return Err(EngineError::GameAlreadyFinished { winner });
        }
        if actor != self.state.active_actor {
            return Err(EngineError::NotYourTurn {
                actor,
                active: self.state.active_actor,
            });
        }
        if !is_valid_addend(addend) {
            return Err(EngineError::InvalidAddend(addend));
        }
        self.state
            .current_sum
            .checked_add(addend)
            .ok_or(EngineError::SumOverflow {
                current_sum: self.state.current_sum,
                addend,
            })
    }
}
