//! # prime-race
//!
//! A two-player arithmetic race. Players alternately add 1-5 to a running
//! sum; a move that makes the sum prime scores the sum as points. First to
//! 100 points wins.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: `Engine` owns the only mutable `GameState`.
//!    Everyone else reads snapshots.
//!
//! 2. **Structured Log**: The engine records `LogEntry` values, not text.
//!    `display` turns them into English for adapters that want it.
//!
//! 3. **Synchronous Rules**: Moves apply instantly. The pause before the
//!    computer replies is a presentation setting on `SessionConfig`.
//!
//! ## Modules
//!
//! - `core`: Actors, state, log entries, errors, RNG, configuration
//! - `primality`: Prime test used for scoring and by the opponent
//! - `rules`: The game engine
//! - `policy`: Computer opponent move selection
//! - `session`: Engine + policy pairing for a UI to drive
//! - `display`: Text rendering of state and log

pub mod core;
pub mod primality;
pub mod rules;
pub mod policy;
pub mod session;
pub mod display;

// Re-export commonly used types
pub use crate::core::{
    Actor, ActorMap, EngineError, GameRng, GameState, GameStatus, LogEntry, SessionConfig,
    MAX_ADDEND, MIN_ADDEND, TARGET_SCORE,
};

pub use crate::primality::is_prime;

pub use crate::rules::{Engine, MoveOutcome};

pub use crate::policy::{choose_move, GreedyPrimePolicy, OpponentPolicy};

pub use crate::session::Session;
