//! Game state: running sum, scores, turn, move log, and status.
//!
//! ## GameState
//!
//! The single aggregate owned by the `Engine`. Callers only ever see clones
//! of it (snapshots); the engine is the sole writer.
//!
//! ## LogEntry
//!
//! One structured record per applied move. Entries carry no display text;
//! see `display` for formatting.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorMap};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// Terminal. `winner` reached the target score on their last move.
    Finished { winner: Actor },
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished { .. })
    }

    /// The winner, if the game has ended.
    #[must_use]
    pub fn winner(self) -> Option<Actor> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Finished { winner } => Some(winner),
        }
    }
}

/// Record of a single applied move. Never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    /// Who moved.
    pub actor: Actor,

    /// The number added (1..=5).
    pub amount_added: u32,

    /// Running sum after the move.
    pub resulting_sum: u32,

    /// Whether `resulting_sum` is prime.
    pub scored: bool,

    /// Points credited to `actor`: `resulting_sum` if prime, else 0.
    pub points_awarded: u32,
}

/// Complete game state.
///
/// Uses an `im` vector for the log so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Running total, starts at 0.
    pub current_sum: u32,

    /// Cumulative points per actor.
    pub scores: ActorMap<u32>,

    /// Whose turn it is. Left unchanged once the game finishes.
    pub active_actor: Actor,

    /// Every applied move, oldest first.
    pub log: Vector<LogEntry>,

    /// `InProgress` until the mover's score reaches `TARGET_SCORE`.
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Start-of-game state: sum 0, both scores 0, Human to move, empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_sum: 0,
            scores: ActorMap::default(),
            active_actor: Actor::Human,
            log: Vector::new(),
            status: GameStatus::InProgress,
        }
    }

    /// An actor's current score.
    #[must_use]
    pub fn score(&self, actor: Actor) -> u32 {
        self.scores[actor]
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// The winner, if the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Actor> {
        self.status.winner()
    }

    /// The most recent log entry.
    #[must_use]
    pub fn last_entry(&self) -> Option<&LogEntry> {
        self.log.last()
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.log.len()
    }

    /// Append an entry, advancing the sum and the mover's score.
    pub(crate) fn record(&mut self, entry: LogEntry) {
        self.current_sum = entry.resulting_sum;
        let score = &mut self.scores[entry.actor];
        *score = score.saturating_add(entry.points_awarded);
        self.log.push_back(entry);
    }
}
