//! Fuzzy heating controller.
//!
//! Pipeline per call:
//!
//! ```text
//!  measured ──▶ error = target − measured
//!                 │
//!                 ├──▶ DerivativeEstimator ──▶ rate (°C/min)
//!                 ▼                              │
//!              Fuzzified::new(error, rate) ◀─────┘
//!                 │
//!                 ▼
//!              rules::fire ──▶ defuzz::weighted_average ──▶ output %
//! ```
//!
//! The controller is synchronous and keeps its own derivative history;
//! callers must serialise access.  Timestamps are supplied by the caller
//! so simulated clocks drive it as easily as the wall clock.
//!
//! Inputs are not validated: a NaN temperature yields a NaN output, and
//! so does the next sample, whose rate is measured against it.

use std::time::Instant;

use log::{debug, info};

use super::defuzz::weighted_average;
use super::derivative::DerivativeEstimator;
use super::membership::Fuzzified;
use super::rules::{self, Activation, RULE_COUNT};

/// Full breakdown of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// target − measured, °C.
    pub error: f64,
    /// Estimated d(error)/dt, °C/min.
    pub rate: f64,
    pub memberships: Fuzzified,
    pub activations: [Activation; RULE_COUNT],
    /// Heating output, percent.
    pub output: f64,
}

/// Fuzzy-logic heater controller.
#[derive(Debug, Clone)]
pub struct FuzzyController {
    target: f64,
    derivative: DerivativeEstimator,
}

impl FuzzyController {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            derivative: DerivativeEstimator::new(),
        }
    }

    /// Target temperature, °C.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Change the target; applies from the next evaluation.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Heating output in `[0, 100]` for `current` °C measured at `now`.
    pub fn evaluate(&mut self, current: f64, now: Instant) -> f64 {
        self.evaluate_detailed(current, now).output
    }

    /// Like [`evaluate`](Self::evaluate) but returns every intermediate.
    pub fn evaluate_detailed(&mut self, current: f64, now: Instant) -> Evaluation {
        let error = self.target - current;
        let rate = self.derivative.update(error, now);
        let memberships = Fuzzified::new(error, rate);
        let activations = rules::fire(&memberships);
        let output = weighted_average(&activations);

        debug!(
            "fuzzy: T={:.2} target={:.2} err={:+.3} rate={:+.3}/min -> {:.1}%",
            current, self.target, error, rate, output
        );

        Evaluation {
            error,
            rate,
            memberships,
            activations,
            output,
        }
    }

    /// Clear derivative history; the next evaluation acts as the first.
    pub fn reset(&mut self) {
        self.derivative.reset();
        info!("fuzzy controller reset");
    }

    /// Last recorded error, 0 before the first evaluation.
    pub fn previous_error(&self) -> f64 {
        self.derivative.previous_error()
    }

    /// Whether a previous sample exists for rate estimation.
    pub fn has_history(&self) -> bool {
        self.derivative.has_history()
    }
}
