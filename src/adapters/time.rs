//! Time adapters.
//!
//! Provides monotonic time for the control loop.
//!
//! - [`MonotonicClock`]: wraps `std::time::Instant::now()` for real-time
//!   operation.
//! - [`SimClock`]: a synthetic clock advanced explicitly by the caller,
//!   for simulation and tests.  It runs faster than wall time and is fully
//!   deterministic.

use std::time::{Duration, Instant};

use crate::app::ports::Clock;

/// Wall-clock time adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Simulated clock: `origin + elapsed`, where `elapsed` only moves when
/// [`advance`](Self::advance) is called.
#[derive(Debug, Clone, Copy)]
pub struct SimClock {
    origin: Instant,
    elapsed: Duration,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(origin: Instant) -> Self {
        Self {
            origin,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.elapsed += by;
    }

    /// Simulated time since the origin.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Clock for SimClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }
}
