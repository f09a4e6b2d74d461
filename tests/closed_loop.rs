//! Closed-loop tests: ControlLoop driving the FirstOrderPlant.
//!
//! With the default plant (gain 2 °C/min, loss 0.1/min, ambient 10 °C)
//! holding T needs 5·(T − 10) % output.  At zero rate the fuzzy map gives
//! 15 + 37.5·e % for 0 ≤ e ≤ 1.2, so the two balance at e = 35/42.5 °C and
//! the loop settles just below target (there is no integral action).

use fuzzytherm::adapters::time::SimClock;
use fuzzytherm::adapters::trace::TraceRecorder;
use fuzzytherm::app::ports::ThermalPlant;
use fuzzytherm::app::service::ControlLoop;
use fuzzytherm::config::AppConfig;
use fuzzytherm::sim::FirstOrderPlant;

const SETTLED_ERROR_C: f64 = 35.0 / 42.5;

fn run(config: &AppConfig, ticks: u64, step: Option<(u64, f64)>) -> (FirstOrderPlant, TraceRecorder) {
    let mut lp = ControlLoop::new(config).unwrap();
    let mut plant = FirstOrderPlant::from_config(config);
    let mut clock = SimClock::new();
    let mut trace = TraceRecorder::new(config.trace_capacity);

    lp.start(&clock, &mut trace);
    for tick in 1..=ticks {
        if let Some((at, to)) = step {
            if tick == at {
                lp.set_target(to, &mut trace);
            }
        }
        lp.tick(&clock, &mut plant, &mut trace);
        clock.advance(lp.tick_interval());
    }
    (plant, trace)
}

#[test]
fn settles_below_target_without_overshoot() {
    let config = AppConfig::default();
    let (plant, trace) = run(&config, 3600, None);

    let expected = config.target_temperature_c - SETTLED_ERROR_C;
    assert!(
        (plant.temperature() - expected).abs() < 0.01,
        "settled at {:.3}, expected {:.3}",
        plant.temperature(),
        expected
    );
    let summary = trace.summary().unwrap();
    assert_eq!(summary.overshoot_c, 0.0);
    let holding = 100.0 * config.loss_coefficient_per_min
        * (expected - config.ambient_temperature_c)
        / config.heater_gain_c_per_min;
    assert!((summary.mean_output_percent - holding).abs() < 0.1);
}

#[test]
fn coarse_ticks_still_converge() {
    let config = AppConfig {
        tick_interval_ms: 60_000,
        ..AppConfig::default()
    };
    let (plant, trace) = run(&config, 120, None);
    assert!((plant.temperature() - (20.0 - SETTLED_ERROR_C)).abs() < 0.05);
    assert!(trace.points().all(|p| (0.0..=100.0).contains(&p.output_percent)));
}

#[test]
fn follows_a_setpoint_step() {
    let config = AppConfig::default();
    let (plant, trace) = run(&config, 7200, Some((3600, 25.0)));

    let last = trace.latest().unwrap();
    assert_eq!(last.target_c, 25.0);
    assert!(plant.temperature() > 23.0 && plant.temperature() < 25.0);
}

#[test]
fn cooling_target_shuts_heater_off() {
    let config = AppConfig {
        initial_temperature_c: 30.0,
        ..AppConfig::default()
    };
    let (_plant, trace) = run(&config, 10, None);
    assert!(trace.points().all(|p| p.output_percent == 0.0));
}
