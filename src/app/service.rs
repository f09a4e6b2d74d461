//! Application service: the hexagonal core.
//!
//! [`ControlLoop`] owns the fuzzy controller and the loop timing.  It
//! exposes a clean, hardware-agnostic API.  All I/O flows through port
//! traits injected at call sites, making the loop testable with mock
//! adapters and a synthetic clock.
//!
//! ```text
//!        Clock ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                  │      ControlLoop       │
//! ThermalPlant ◀──▶│    FuzzyController     │
//!                  └────────────────────────┘
//! ```

use std::time::{Duration, Instant};

use log::info;

use crate::config::AppConfig;
use crate::control::FuzzyController;
use crate::error::Result;

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{Clock, EventSink, ThermalPlant};

// ───────────────────────────────────────────────────────────────
// ControlLoop
// ───────────────────────────────────────────────────────────────

/// Drives one fuzzy controller against one plant, tick by tick.
pub struct ControlLoop {
    controller: FuzzyController,
    tick_interval: Duration,
    tick_count: u64,
    started_at: Option<Instant>,
}

impl ControlLoop {
    /// Construct the loop from validated configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            controller: FuzzyController::new(config.target_temperature_c),
            tick_interval: Duration::from_millis(u64::from(config.tick_interval_ms)),
            tick_count: 0,
            started_at: None,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the loop and pin the time origin for telemetry.
    pub fn start(&mut self, clock: &impl Clock, sink: &mut impl EventSink) {
        self.started_at = Some(clock.now());
        let target_c = self.controller.target();
        sink.emit(&AppEvent::Started { target_c });
        info!("control loop started, target {:.2} °C", target_c);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control cycle: clock → measure → evaluate → drive plant.
    ///
    /// Returns the heater output applied this tick.
    pub fn tick(
        &mut self,
        clock: &impl Clock,
        plant: &mut impl ThermalPlant,
        sink: &mut impl EventSink,
    ) -> f64 {
        self.tick_count += 1;

        // 1. Sample time and temperature
        let now = clock.now();
        let origin = *self.started_at.get_or_insert(now);
        let temperature_c = plant.temperature();

        // 2. Fuzzy evaluation
        let eval = self.controller.evaluate_detailed(temperature_c, now);

        // 3. Drive the heater for one interval
        plant.apply(eval.output, self.tick_interval);

        // 4. Telemetry
        sink.emit(&AppEvent::Telemetry(TelemetryData {
            tick: self.tick_count,
            elapsed_secs: now.saturating_duration_since(origin).as_secs_f64(),
            temperature_c,
            target_c: self.controller.target(),
            error_c: eval.error,
            rate_c_per_min: eval.rate,
            output_percent: eval.output,
        }));

        eval.output
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) {
        match cmd {
            AppCommand::SetTarget(to) => {
                let from = self.controller.target();
                self.controller.set_target(to);
                sink.emit(&AppEvent::TargetChanged { from, to });
                info!("target changed {:.2} -> {:.2} °C", from, to);
            }
            AppCommand::ResetController => {
                self.controller.reset();
                sink.emit(&AppEvent::ControllerReset);
            }
        }
    }

    pub fn set_target(&mut self, target_c: f64, sink: &mut impl EventSink) {
        self.handle_command(AppCommand::SetTarget(target_c), sink);
    }

    pub fn reset(&mut self, sink: &mut impl EventSink) {
        self.handle_command(AppCommand::ResetController, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current target, °C.
    pub fn target(&self) -> f64 {
        self.controller.target()
    }

    /// Total control ticks executed since construction.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn controller(&self) -> &FuzzyController {
        &self.controller
    }
}
