//! Outbound application events.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them: log them, append them to
//! the chart trace, record them in a test.

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// One control tick completed.
    Telemetry(TelemetryData),

    /// The target temperature was changed.
    TargetChanged { from: f64, to: f64 },

    /// The controller's derivative history was cleared.
    ControllerReset,

    /// The control loop has started (carries the initial target).
    Started { target_c: f64 },
}

/// A point-in-time telemetry snapshot suitable for logging or charting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    /// Tick number, starting at 1.
    pub tick: u64,
    /// Simulated time since the loop started, seconds.
    pub elapsed_secs: f64,
    pub temperature_c: f64,
    pub target_c: f64,
    pub error_c: f64,
    pub rate_c_per_min: f64,
    pub output_percent: f64,
}
