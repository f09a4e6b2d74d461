//! Chart trace adapter.
//!
//! Keeps the most recent telemetry points in a fixed-capacity ring so a
//! front end can plot temperature and heater output over time.  Older
//! points are overwritten once the ring is full.

use heapless::HistoryBuffer;

use crate::app::events::{AppEvent, TelemetryData};
use crate::app::ports::EventSink;
use crate::config::TRACE_CAPACITY;

/// Summary statistics over the retained trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSummary {
    pub points: usize,
    pub final_temperature_c: f64,
    pub mean_output_percent: f64,
    /// Largest excursion above the target seen in the window, °C (≥ 0).
    pub overshoot_c: f64,
}

/// Bounded telemetry recorder.
pub struct TraceRecorder {
    buf: HistoryBuffer<TelemetryData, TRACE_CAPACITY>,
    limit: usize,
}

impl Default for TraceRecorder {
    fn default() -> Self {
        Self::new(TRACE_CAPACITY)
    }
}

impl TraceRecorder {
    /// Keep at most `limit` points (clamped to `1..=TRACE_CAPACITY`).
    pub fn new(limit: usize) -> Self {
        Self {
            buf: HistoryBuffer::new(),
            limit: limit.clamp(1, TRACE_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len().min(self.limit)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retained points, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &TelemetryData> {
        let skip = self.buf.len() - self.len();
        self.buf.oldest_ordered().skip(skip)
    }

    pub fn latest(&self) -> Option<&TelemetryData> {
        self.buf.recent()
    }

    pub fn summary(&self) -> Option<TraceSummary> {
        let last = self.latest()?;
        let (sum, overshoot) = self.points().fold((0.0, 0.0_f64), |(s, o), p| {
            (s + p.output_percent, o.max(p.temperature_c - p.target_c))
        });
        let points = self.len();
        Some(TraceSummary {
            points,
            final_temperature_c: last.temperature_c,
            mean_output_percent: sum / points as f64,
            overshoot_c: overshoot,
        })
    }
}

impl EventSink for TraceRecorder {
    fn emit(&mut self, event: &AppEvent) {
        if let AppEvent::Telemetry(t) = event {
            self.buf.write(*t);
        }
    }
}
