//! Rule constants and session configuration.
//!
//! The rules are fixed: there are no variants. Only presentation concerns
//! (opponent delay, RNG seed) are configurable, via `SessionConfig`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Score an actor must reach (or exceed) to win.
pub const TARGET_SCORE: u32 = 100;

/// Smallest number a move may add to the running sum.
pub const MIN_ADDEND: u32 = 1;

/// Largest number a move may add to the running sum.
pub const MAX_ADDEND: u32 = 5;

/// Default pause before the opponent answers a human move.
pub const DEFAULT_OPPONENT_DELAY: Duration = Duration::from_millis(1000);

/// Check if `addend` is a legal move value.
#[must_use]
pub const fn is_valid_addend(addend: u32) -> bool {
    addend >= MIN_ADDEND && addend <= MAX_ADDEND
}

/// Presentation-side configuration for a game session.
///
/// None of these settings affect game semantics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the opponent's random fallback move.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// How long the adapter waits before asking the opponent to move.
    pub opponent_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            opponent_delay: DEFAULT_OPPONENT_DELAY,
        }
    }
}

impl SessionConfig {
    /// Create a config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a config with a custom opponent delay.
    #[must_use]
    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addends() {
        assert!(!is_valid_addend(0));
        for n in 1..=5 {
            assert!(is_valid_addend(n));
        }
        assert!(!is_valid_addend(6));
        assert!(!is_valid_addend(u32::MAX));
    }

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();

        assert_eq!(config.seed, None);
        assert_eq!(config.opponent_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_session_config_builder() {
        let config = SessionConfig::default()
            .with_seed(7)
            .with_opponent_delay(Duration::ZERO);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.opponent_delay, Duration::ZERO);
    }

    #[test]
    fn test_session_config_serde() {
        let config = SessionConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
