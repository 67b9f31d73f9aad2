//! Move selection for the computer opponent.
//!
//! Policies are trait-based so the session can be driven by any
//! move source:
//! - `GreedyPrimePolicy`: largest reachable prime, else random

mod greedy;

pub use greedy::{best_prime_addend, choose_move, GreedyPrimePolicy};

/// Chooses the opponent's addend for a given running sum.
pub trait OpponentPolicy {
    /// Return an addend in 1..=5.
    fn choose_move(&mut self, current_sum: u32) -> u32;
}
