//! Move validation errors.

use thiserror::Error;

use super::actor::Actor;

/// Why the engine rejected a move. A rejected move never changes state.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("addend {0} is outside 1..=5")]
    InvalidAddend(u32),
    #[error("it is {active}'s turn, not {actor}'s")]
    NotYourTurn { actor: Actor, active: Actor },
    #[error("the game is over, {winner} already won")]
    GameAlreadyFinished { winner: Actor },
    #[error("adding {addend} to {current_sum} overflows the running sum")]
    SumOverflow { current_sum: u32, addend: u32 },
}
