//! Bet ramp keyed by the true count.

use thiserror::Error;

/// Default ramp for true counts <=0, 1, 2, 3, 4 and above 4.
pub const DEFAULT_TIERS: [u32; 6] = [10, 20, 40, 60, 80, 100];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BetTierError {
    #[error("bet tiers must not decrease: tier {index} ({value}) is below {previous}")]
    Decreasing { index: usize, value: u32, previous: u32 },
}

/// Maps a true count to a wager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetPolicy {
    tiers: [u32; 6],
}

impl Default for BetPolicy {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS,
        }
    }
}

impl BetPolicy {
    pub fn new(tiers: [u32; 6]) -> Result<Self, BetTierError> {
        for (index, pair) in tiers.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(BetTierError::Decreasing {
                    index: index + 1,
                    value: pair[1],
                    previous: pair[0],
                });
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[u32; 6] {
        &self.tiers
    }

    /// Wager for the given true count, rounded to the nearest integer band.
    pub fn bet_size(&self, true_count: f64) -> u32 {
        let rounded = true_count.round();
        let band = if rounded.is_nan() || rounded <= 0.0 {
            0
        } else if rounded >= 5.0 {
            5
        } else {
            rounded as usize
        };
        self.tiers[band]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let policy = BetPolicy::default();
        assert_eq!(policy.bet_size(0.0), 10);
        assert_eq!(policy.bet_size(1.0), 20);
        assert_eq!(policy.bet_size(2.0), 40);
        assert_eq!(policy.bet_size(3.0), 60);
        assert_eq!(policy.bet_size(4.0), 80);
        assert_eq!(policy.bet_size(5.0), 100);
        assert_eq!(policy.bet_size(12.5), 100);
    }

    #[test]
    fn test_negative_counts_clamp_to_lowest_band() {
        let policy = BetPolicy::default();
        assert_eq!(policy.bet_size(-5.0), policy.bet_size(0.0));
        assert_eq!(policy.bet_size(f64::NEG_INFINITY), 10);
    }

    #[test]
    fn test_rounding_to_nearest_band() {
        let policy = BetPolicy::default();
        assert_eq!(policy.bet_size(0.4), 10);
        assert_eq!(policy.bet_size(0.6), 20);
        assert_eq!(policy.bet_size(4.4), 80);
        assert_eq!(policy.bet_size(4.6), 100);
    }

    #[test]
    fn test_monotonic_in_true_count() {
        let policy = BetPolicy::default();
        let mut previous = 0;
        for step in -80..=80 {
            let tc = step as f64 / 10.0;
            let bet = policy.bet_size(tc);
            assert!(bet >= previous, "bet dropped at tc {}", tc);
            previous = bet;
        }
    }

    #[test]
    fn test_bet_size_is_repeatable() {
        let policy = BetPolicy::default();
        assert_eq!(policy.bet_size(2.3), policy.bet_size(2.3));
    }

    #[test]
    fn test_custom_tiers() {
        let policy = BetPolicy::new([1, 2, 4, 6, 8, 10]).unwrap();
        assert_eq!(policy.bet_size(3.2), 6);
        assert_eq!(policy.tiers(), &[1, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_decreasing_tiers_are_rejected() {
        let err = BetPolicy::new([10, 20, 15, 60, 80, 100]).unwrap_err();
        assert_eq!(
            err,
            BetTierError::Decreasing {
                index: 2,
                value: 15,
                previous: 20
            }
        );
    }
}
