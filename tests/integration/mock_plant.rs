//! Mock plant and event sink for integration tests.
//!
//! Records every heater command so tests can assert on the full output
//! history without running a thermal model.

use std::time::Duration;

use fuzzytherm::app::events::{AppEvent, TelemetryData};
use fuzzytherm::app::ports::{EventSink, ThermalPlant};

// ── Heater call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplyCall {
    pub output_percent: f64,
    pub dt: Duration,
}

// ── MockPlant ─────────────────────────────────────────────────

/// Plant whose temperature is scripted by the test.
pub struct MockPlant {
    pub temperature_c: f64,
    pub calls: Vec<ApplyCall>,
}

#[allow(dead_code)]
impl MockPlant {
    pub fn at(temperature_c: f64) -> Self {
        Self {
            temperature_c,
            calls: Vec::new(),
        }
    }

    pub fn last_output(&self) -> Option<f64> {
        self.calls.last().map(|c| c.output_percent)
    }
}

impl ThermalPlant for MockPlant {
    fn temperature(&self) -> f64 {
        self.temperature_c
    }

    fn apply(&mut self, output_percent: f64, dt: Duration) {
        self.calls.push(ApplyCall { output_percent, dt });
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn telemetry(&self) -> Vec<TelemetryData> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Telemetry(t) => Some(*t),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
