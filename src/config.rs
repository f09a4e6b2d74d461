//! System configuration parameters
//!
//! Tunables for the control loop and the simulated heater plant.
//! Values can be overridden from a JSON file via
//! [`JsonConfigFile`](crate::adapters::config_file::JsonConfigFile).
//!
//! The fuzzy membership breakpoints and rule table are fixed and are
//! deliberately absent here.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum number of telemetry points kept for the temperature chart.
pub const TRACE_CAPACITY: usize = 512;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    // --- Control ---
    /// Target temperature (Celsius)
    pub target_temperature_c: f64,

    // --- Plant ---
    /// Plant temperature at start of simulation (Celsius)
    pub initial_temperature_c: f64,
    /// Ambient temperature the plant loses heat toward (Celsius)
    pub ambient_temperature_c: f64,
    /// Temperature rise per minute at 100% heater output (Celsius/min)
    pub heater_gain_c_per_min: f64,
    /// Fraction of the gap to ambient lost per minute (0, 1]
    pub loss_coefficient_per_min: f64,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub tick_interval_ms: u32,

    // --- Chart ---
    /// Telemetry points kept for the summary (at most TRACE_CAPACITY)
    pub trace_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Control
            target_temperature_c: 20.0,

            // Plant
            initial_temperature_c: 15.0,
            ambient_temperature_c: 10.0,
            heater_gain_c_per_min: 2.0,
            loss_coefficient_per_min: 0.1,

            // Timing
            tick_interval_ms: 1000, // 1 Hz

            // Chart
            trace_capacity: TRACE_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let temps = [
            self.target_temperature_c,
            self.initial_temperature_c,
            self.ambient_temperature_c,
        ];
        if temps.iter().any(|t| !t.is_finite()) {
            return Err(ConfigError::ValidationFailed("temperatures must be finite"));
        }
        if !(self.heater_gain_c_per_min.is_finite() && self.heater_gain_c_per_min > 0.0) {
            return Err(ConfigError::ValidationFailed("heater_gain_c_per_min must be > 0"));
        }
        if !(self.loss_coefficient_per_min > 0.0 && self.loss_coefficient_per_min <= 1.0) {
            return Err(ConfigError::ValidationFailed(
                "loss_coefficient_per_min must be in (0, 1]",
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_interval_ms must be > 0"));
        }
        if self.trace_capacity == 0 || self.trace_capacity > TRACE_CAPACITY {
            return Err(ConfigError::ValidationFailed(
                "trace_capacity must be in 1..=TRACE_CAPACITY",
            ));
        }
        Ok(())
    }
}
