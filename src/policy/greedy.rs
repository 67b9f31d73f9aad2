//! Greedy one-ply prime policy.
//!
//! Looks only at the sums reachable this move. Takes the largest prime among
//! them; with no prime in reach, picks uniformly at random.

use log::trace;

use crate::core::{GameRng, MAX_ADDEND, MIN_ADDEND};
use crate::primality::is_prime;

use super::OpponentPolicy;

/// The addend giving the largest prime sum, if any addend reaches a prime.
///
/// Candidates are scanned in ascending order and a later candidate replaces
/// the running best only if its sum is strictly larger.
///
/// ```
/// use prime_race::policy::best_prime_addend;
///
/// assert_eq!(best_prime_addend(0), Some(5)); // 2, 3, 5 reachable; 5 wins
/// assert_eq!(best_prime_addend(3), Some(4)); // 5 and 7 reachable
/// assert_eq!(best_prime_addend(113), None);  // 114..=118 are all composite
/// ```
#[must_use]
pub fn best_prime_addend(current_sum: u32) -> Option<u32> {
    let mut best: Option<(u32, u32)> = None;

    for addend in MIN_ADDEND..=MAX_ADDEND {
        // A sum past u32::MAX is not a candidate
        let Some(candidate) = current_sum.checked_add(addend) else {
            break;
        };
        let prime = is_prime(i64::from(candidate));
        trace!("candidate {addend}: sum {candidate}, prime {prime}");

        if prime && best.map_or(true, |(_, best_sum)| candidate > best_sum) {
            best = Some((addend, candidate));
        }
    }

    best.map(|(addend, _)| addend)
}

/// Pick the opponent's addend for `current_sum`.
///
/// Falls back to a uniform draw from 1..=5 using `rng` when no addend
/// makes the sum prime.
pub fn choose_move(current_sum: u32, rng: &mut GameRng) -> u32 {
    match best_prime_addend(current_sum) {
        Some(addend) => addend,
        None => {
            let addend = rng.gen_range_inclusive(MIN_ADDEND, MAX_ADDEND);
            trace!("no prime within reach of {current_sum}, random {addend}");
            addend
        }
    }
}

/// The computer opponent's policy: greedy prime with a random fallback.
#[derive(Clone, Debug)]
pub struct GreedyPrimePolicy {
    rng: GameRng,
}

impl GreedyPrimePolicy {
    /// Create a policy drawing fallback moves from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a policy with a seeded fallback RNG.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Default for GreedyPrimePolicy {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl OpponentPolicy for GreedyPrimePolicy {
    fn choose_move(&mut self, current_sum: u32) -> u32 {
        choose_move(current_sum, &mut self.rng)
    }
}
