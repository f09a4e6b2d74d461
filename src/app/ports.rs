//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (clock, plant, event sinks, config store) implement
//! these traits.  The [`ControlLoop`](super::service::ControlLoop)
//! consumes them via generics, so the fuzzy core never reads a clock or
//! touches a heater directly.

use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::error::ConfigError;

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic time source used for rate estimation.
///
/// Implementations must never go backwards; if they do, the controller
/// treats the sample as carrying no rate information.
pub trait Clock {
    fn now(&self) -> Instant;
}

// ───────────────────────────────────────────────────────────────
// Plant port (driven adapter: domain ↔ heater + thermometer)
// ───────────────────────────────────────────────────────────────

/// The heated system under control.
pub trait ThermalPlant {
    /// Current measured temperature, °C.
    fn temperature(&self) -> f64;

    /// Drive the heater at `output_percent` (0–100) for `dt`.
    fn apply(&mut self, output_percent: f64, dt: Duration);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / chart)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (log, chart trace,
/// test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

/// Fan an event out to two sinks.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, event: &super::events::AppEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads system configuration.
///
/// Implementations MUST validate before returning; invalid ranges are
/// rejected with [`ConfigError::ValidationFailed`], not silently clamped.
pub trait ConfigPort {
    fn load(&self) -> Result<AppConfig, ConfigError>;
}
