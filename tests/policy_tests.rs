//! Opponent policy behavior against the primality oracle.

use prime_race::policy::{best_prime_addend, choose_move};
use prime_race::{is_prime, GameRng, MAX_ADDEND, MIN_ADDEND};

// =============================================================================
// Prime Selection Tests
// =============================================================================

#[test]
fn test_choose_move_from_zero() {
    let mut rng = GameRng::new(0);
    assert_eq!(choose_move(0, &mut rng), 5);
}

#[test]
fn test_choice_is_largest_reachable_prime() {
    for sum in 0..2_000u32 {
        let reachable: Vec<u32> = (MIN_ADDEND..=MAX_ADDEND)
            .filter(|&a| is_prime(i64::from(sum + a)))
            .collect();

        assert_eq!(best_prime_addend(sum), reachable.last().copied(), "sum = {sum}");
    }
}

#[test]
fn test_prime_choice_ignores_rng() {
    let mut a = GameRng::new(1);
    let mut b = GameRng::new(2);

    for sum in [0, 3, 6, 8, 14, 20, 96] {
        assert_eq!(choose_move(sum, &mut a), choose_move(sum, &mut b), "sum = {sum}");
    }
}

// =============================================================================
// Random Fallback Tests
// =============================================================================

#[test]
fn test_fallback_covers_every_addend() {
    let mut rng = GameRng::new(11);
    let mut seen = [0u32; 6];

    // 24..=28 holds no prime
    for _ in 0..1_000 {
        seen[choose_move(23, &mut rng) as usize] += 1;
    }

    assert_eq!(seen[0], 0);
    for count in &seen[1..] {
        assert!(*count > 100, "uneven fallback: {seen:?}");
    }
}

/// Sums at the top of the u32 range still yield a legal addend.
#[test]
fn test_fallback_at_u32_limit() {
    let mut rng = GameRng::new(1);

    for sum in [u32::MAX - 4, u32::MAX - 1, u32::MAX] {
        let addend = choose_move(sum, &mut rng);
        assert!((MIN_ADDEND..=MAX_ADDEND).contains(&addend), "sum = {sum}");
    }
}
