//! Rate-of-change estimation over irregular sample spacing.

use std::time::Instant;

use log::debug;

/// A remembered error sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub error: f64,
    pub at: Instant,
}

/// First-difference estimator of d(error)/dt in error-units per minute.
///
/// Holds at most one previous sample.  With no sample (fresh or reset)
/// the estimate is 0.
#[derive(Debug, Clone, Default)]
pub struct DerivativeEstimator {
    previous: Option<Sample>,
}

impl DerivativeEstimator {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Estimate the rate for `error` observed at `now`, then remember it.
    ///
    /// Returns 0 when there is no history, or when `now` is not strictly
    /// after the previous sample (stalled or backward clock).
    pub fn update(&mut self, error: f64, now: Instant) -> f64 {
        let rate = match self.previous {
            None => 0.0,
            Some(prev) => match now.checked_duration_since(prev.at) {
                Some(elapsed) if !elapsed.is_zero() => {
                    let minutes = elapsed.as_secs_f64() / 60.0;
                    (error - prev.error) / minutes
                }
                _ => {
                    debug!("clock did not advance since last sample; rate held at 0");
                    0.0
                }
            },
        };

        self.previous = Some(Sample { error, at: now });
        rate
    }

    /// The last recorded error, or 0 before the first sample.
    pub fn previous_error(&self) -> f64 {
        self.previous.map_or(0.0, |s| s.error)
    }

    /// The last recorded sample, if any.
    pub fn previous(&self) -> Option<Sample> {
        self.previous
    }

    pub fn has_history(&self) -> bool {
        self.previous.is_some()
    }

    /// Forget all history.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
