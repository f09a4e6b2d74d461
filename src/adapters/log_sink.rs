//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade.  Telemetry is logged every `telemetry_every` ticks
//! so long simulations stay readable.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs [`AppEvent`]s to the console.
pub struct LogEventSink {
    telemetry_every: u64,
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self { telemetry_every: 1 }
    }

    /// Only log every `n`th telemetry tick (0 is treated as 1).
    pub fn every(n: u64) -> Self {
        Self {
            telemetry_every: n.max(1),
        }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                if t.tick % self.telemetry_every != 0 {
                    return;
                }
                info!(
                    "TELEM | tick={} t={:.0}s | T={:.2}\u{00b0}C target={:.2}\u{00b0}C | \
                     err={:+.2} rate={:+.2}/min | heater={:.1}%",
                    t.tick,
                    t.elapsed_secs,
                    t.temperature_c,
                    t.target_c,
                    t.error_c,
                    t.rate_c_per_min,
                    t.output_percent,
                );
            }
            AppEvent::TargetChanged { from, to } => {
                info!("TARGET | {:.2} -> {:.2}\u{00b0}C", from, to);
            }
            AppEvent::ControllerReset => {
                info!("RESET | derivative history cleared");
            }
            AppEvent::Started { target_c } => {
                info!("START | target={:.2}\u{00b0}C", target_c);
            }
        }
    }
}
