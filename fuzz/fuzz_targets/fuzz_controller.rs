//! Fuzz target: `FuzzyController`
//!
//! Drives arbitrary (temperature, time-step, target) sequences through
//! the controller and verifies:
//! - No panics for any input, including non-finite values
//! - Finite inputs always produce an output in [0, 100]
//! - A reset followed by an evaluation matches a fresh controller
//!
//! cargo fuzz run fuzz_controller

#![no_main]

use std::time::{Duration, Instant};

use fuzzytherm::control::FuzzyController;
use libfuzzer_sys::fuzz_target;

fn f64_at(data: &[u8], at: usize) -> f64 {
    data.get(at..at + 8)
        .and_then(|s| s.try_into().ok())
        .map(f64::from_le_bytes)
        .unwrap_or(0.0)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    let target = f64_at(data, 0);
    let mut controller = FuzzyController::new(target);
    let mut now = Instant::now();

    // Each 10-byte record: [temperature f64][step_ms u16].
    for record in data[8..].chunks(10) {
        let temperature = f64_at(record, 0);
        let step_ms = record
            .get(8..10)
            .map(|b| u16::from_le_bytes([b[0], b[1]]))
            .unwrap_or(0);
        now += Duration::from_millis(u64::from(step_ms));

        let output = controller.evaluate(temperature, now);

        let finite_inputs = target.is_finite() && temperature.is_finite();
        if finite_inputs && output.is_finite() {
            assert!(
                (0.0..=100.0).contains(&output),
                "output {output} out of range for target={target} T={temperature}"
            );
        }
    }

    // Reset idempotence against a fresh controller.
    let probe = f64_at(data, data.len().saturating_sub(8));
    controller.reset();
    let mut fresh = FuzzyController::new(target);
    let a = controller.evaluate(probe, now);
    let b = fresh.evaluate(probe, now);
    assert!(a == b || (a.is_nan() && b.is_nan()));
});
