//! Random pause between iterations of a simulated user.
//!
//! A [`PacingPolicy`](./struct.PacingPolicy.html) is a closed range of seconds.
//! Each draw is uniform over the whole range, both bounds included:
//!
//! ```rust
//!     use jsonplaceholder_loadtest::pacing::PacingPolicy;
//!
//!     let pacing = PacingPolicy::default();
//!     let wait = pacing.next_wait_duration();
//!     assert!((1.0..=2.0).contains(&wait));
//! ```
//!
//! When running under Goose the same range is handed to
//! `Scenario::set_wait_time`, and Goose performs the sleep itself.

use rand::Rng;
use std::time::Duration;

use crate::LoadTestError;

/// Default lower bound of the pause, in seconds.
pub const DEFAULT_LOW: f64 = 1.0;
/// Default upper bound of the pause, in seconds.
pub const DEFAULT_HIGH: f64 = 2.0;

/// A closed range `[low, high]` of seconds to pause between iterations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PacingPolicy {
    low: f64,
    high: f64,
}
impl PacingPolicy {
    /// Build a pacing policy pausing between `low` and `high` seconds.
    ///
    /// Both bounds must be finite, `low` must not be negative and must be
    /// strictly less than `high`.
    pub fn between(low: f64, high: f64) -> Result<Self, LoadTestError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(LoadTestError::InvalidWaitTime {
                low,
                high,
                detail: "wait times must be finite".to_string(),
            });
        }
        if low < 0.0 {
            return Err(LoadTestError::InvalidWaitTime {
                low,
                high,
                detail: "low wait time can not be negative".to_string(),
            });
        }
        if low >= high {
            return Err(LoadTestError::InvalidWaitTime {
                low,
                high,
                detail: "low wait time must be less than high wait time".to_string(),
            });
        }

        Ok(PacingPolicy { low, high })
    }

    /// A policy that never pauses.
    pub fn disabled() -> Self {
        PacingPolicy {
            low: 0.0,
            high: 0.0,
        }
    }

    /// Whether this policy never pauses.
    pub fn is_disabled(&self) -> bool {
        self.high == 0.0
    }

    /// Lower bound of the pause, in seconds.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound of the pause, in seconds.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Draw the next pause, in seconds, from the thread-local random source.
    pub fn next_wait_duration(&self) -> f64 {
        self.next_wait_duration_with(&mut rand::rng())
    }

    /// Draw the next pause, in seconds, from the provided random source.
    pub fn next_wait_duration_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.is_disabled() {
            return 0.0;
        }
        rng.random_range(self.low..=self.high)
    }

    /// Draw the next pause as a [`Duration`].
    pub fn next_wait(&self) -> Duration {
        Duration::from_secs_f64(self.next_wait_duration())
    }

    /// The range as a `(min, max)` pair of durations, the shape
    /// `Scenario::set_wait_time` expects.
    pub fn as_wait_time(&self) -> (Duration, Duration) {
        (
            Duration::from_secs_f64(self.low),
            Duration::from_secs_f64(self.high),
        )
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        PacingPolicy {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}
