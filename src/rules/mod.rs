//! Game rules: move validation, prime scoring, and the win condition.
//!
//! `Engine` is synchronous and owns the only mutable `GameState`. Callers
//! drive it one move at a time and read back snapshots.

pub mod engine;

pub use engine::{Engine, MoveOutcome};
