//! Integration tests for the ControlLoop → FuzzyController → plant pipeline.

use std::time::Duration;

use fuzzytherm::adapters::time::SimClock;
use fuzzytherm::app::commands::AppCommand;
use fuzzytherm::app::events::AppEvent;
use fuzzytherm::app::service::ControlLoop;
use fuzzytherm::config::AppConfig;

use super::mock_plant::{MockPlant, RecordingSink};

const MINUTE: Duration = Duration::from_secs(60);

fn make_loop(target: f64) -> (ControlLoop, SimClock, RecordingSink) {
    let config = AppConfig {
        target_temperature_c: target,
        tick_interval_ms: 60_000,
        ..AppConfig::default()
    };
    let mut lp = ControlLoop::new(&config).unwrap();
    let clock = SimClock::new();
    let mut sink = RecordingSink::new();
    lp.start(&clock, &mut sink);
    (lp, clock, sink)
}

#[test]
fn start_announces_target() {
    let (_lp, _clock, sink) = make_loop(21.0);
    assert_eq!(sink.events, vec![AppEvent::Started { target_c: 21.0 }]);
}

#[test]
fn end_to_end_two_ticks() {
    let (mut lp, mut clock, mut sink) = make_loop(20.0);
    let mut plant = MockPlant::at(20.0);

    assert_eq!(lp.tick(&clock, &mut plant, &mut sink), 15.0);

    clock.advance(MINUTE);
    plant.temperature_c = 18.0;
    let out = lp.tick(&clock, &mut plant, &mut sink);
    assert!((out - 92.0 / 1.1).abs() < 1e-9, "got {out}");

    let telem = sink.telemetry();
    assert_eq!(telem.len(), 2);
    assert_eq!(telem[1].tick, 2);
    assert_eq!(telem[1].elapsed_secs, 60.0);
    assert_eq!(telem[1].error_c, 2.0);
    assert!((telem[1].rate_c_per_min - 2.0).abs() < 1e-9);
}

#[test]
fn every_tick_drives_the_plant_for_one_interval() {
    let (mut lp, mut clock, mut sink) = make_loop(20.0);
    let mut plant = MockPlant::at(12.0);
    for _ in 0..5 {
        lp.tick(&clock, &mut plant, &mut sink);
        clock.advance(lp.tick_interval());
    }
    assert_eq!(plant.calls.len(), 5);
    assert!(plant.calls.iter().all(|c| c.dt == MINUTE));
    assert!(plant.calls.iter().all(|c| c.output_percent == 100.0));
}

#[test]
fn stalled_clock_reports_zero_rate() {
    let (mut lp, clock, mut sink) = make_loop(20.0);
    let mut plant = MockPlant::at(20.0);
    lp.tick(&clock, &mut plant, &mut sink);
    plant.temperature_c = 19.5;
    lp.tick(&clock, &mut plant, &mut sink);

    let telem = sink.telemetry();
    assert_eq!(telem[1].rate_c_per_min, 0.0);
    assert_eq!(lp.controller().previous_error(), 0.5);
}

#[test]
fn set_target_emits_event_and_applies_next_tick() {
    let (mut lp, mut clock, mut sink) = make_loop(20.0);
    let mut plant = MockPlant::at(20.0);
    lp.tick(&clock, &mut plant, &mut sink);

    lp.handle_command(AppCommand::SetTarget(10.0), &mut sink);
    assert!(sink.events.contains(&AppEvent::TargetChanged { from: 20.0, to: 10.0 }));

    clock.advance(MINUTE);
    assert_eq!(lp.tick(&clock, &mut plant, &mut sink), 0.0);
    assert_eq!(sink.telemetry()[1].target_c, 10.0);
}

#[test]
fn reset_makes_next_tick_a_first_sample() {
    let (mut lp, mut clock, mut sink) = make_loop(20.0);
    let mut plant = MockPlant::at(19.0);
    lp.tick(&clock, &mut plant, &mut sink);

    lp.reset(&mut sink);
    assert_eq!(sink.events.last(), Some(&AppEvent::ControllerReset));
    assert!(!lp.controller().has_history());

    clock.advance(MINUTE);
    plant.temperature_c = 20.0;
    lp.tick(&clock, &mut plant, &mut sink);
    assert_eq!(sink.telemetry()[1].rate_c_per_min, 0.0);
    assert_eq!(plant.last_output(), Some(15.0));
}
