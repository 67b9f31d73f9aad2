//! Primality test used for scoring and by the opponent policy.
//!
//! 6k ± 1 trial division: after ruling out 2 and 3, every remaining prime
//! factor candidate is of the form `6k - 1` or `6k + 1`.

/// Check whether `n` is prime.
///
/// Total over all integers: anything `<= 1` (zero and negatives included)
/// is not prime.
///
/// ```
/// use prime_race::primality::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(91));
/// assert!(!is_prime(-7));
/// ```
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // i <= n / i rather than i * i <= n, so i64::MAX cannot overflow
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_is_prime(n: i64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn test_non_positive_and_one() {
        for n in [i64::MIN, -100, -2, -1, 0, 1] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn test_small_primes() {
        let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
        for n in 0..50 {
            assert_eq!(is_prime(n), primes.contains(&n), "n = {n}");
        }
    }

    #[test]
    fn test_squares_of_primes() {
        // Factor found only at the sqrt bound
        for p in [5i64, 7, 11, 13, 97] {
            assert!(!is_prime(p * p), "{} = {p}^2", p * p);
        }
        assert!(!is_prime(35));
        assert!(!is_prime(5 * 97));
    }

    #[test]
    fn test_matches_trial_division() {
        for n in 0..=10_000 {
            assert_eq!(is_prime(n), naive_is_prime(n), "n = {n}");
        }
    }

    #[test]
    fn test_large_values() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        assert!(!is_prime(i64::MAX)); // 7^2 * 73 * 127 * 337 * 92737 * 649657
    }
}
