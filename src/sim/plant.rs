//! Lumped-capacitance heater model.
//!
//! One thermal mass, heated in proportion to the commanded output and
//! losing heat toward ambient (Newton's law of cooling), integrated with
//! forward Euler:
//!
//! ```text
//! dT/dt = gain · output/100 − loss · (T − ambient)     [°C/min]
//! ```

use std::time::Duration;

use crate::app::ports::ThermalPlant;
use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct FirstOrderPlant {
    temperature_c: f64,
    ambient_c: f64,
    gain_c_per_min: f64,
    loss_per_min: f64,
}

impl FirstOrderPlant {
    pub fn new(initial_c: f64, ambient_c: f64, gain_c_per_min: f64, loss_per_min: f64) -> Self {
        Self {
            temperature_c: initial_c,
            ambient_c,
            gain_c_per_min,
            loss_per_min,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.initial_temperature_c,
            config.ambient_temperature_c,
            config.heater_gain_c_per_min,
            config.loss_coefficient_per_min,
        )
    }

    /// Temperature the plant settles at under a constant output.
    pub fn steady_state_c(&self, output_percent: f64) -> f64 {
        self.ambient_c + self.gain_c_per_min * (output_percent / 100.0) / self.loss_per_min
    }
}

impl ThermalPlant for FirstOrderPlant {
    fn temperature(&self) -> f64 {
        self.temperature_c
    }

    fn apply(&mut self, output_percent: f64, dt: Duration) {
        let minutes = dt.as_secs_f64() / 60.0;
        let heating = self.gain_c_per_min * output_percent.clamp(0.0, 100.0) / 100.0;
        let loss = self.loss_per_min * (self.temperature_c - self.ambient_c);
        self.temperature_c += (heating - loss) * minutes;
    }
}
