//! Core game types: actors, state, log entries, errors, RNG, configuration.

pub mod actor;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use actor::{Actor, ActorMap};
pub use config::{
    is_valid_addend, SessionConfig, DEFAULT_OPPONENT_DELAY, MAX_ADDEND, MIN_ADDEND, TARGET_SCORE,
};
pub use error::EngineError;
pub use rng::GameRng;
pub use state::{GameState, GameStatus, LogEntry};
