//! FuzzyTherm: headless closed-loop simulation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                  │
//! │                                                         │
//! │  SimClock   FirstOrderPlant   LogEventSink  TraceRecorder│
//! │  (Clock)    (ThermalPlant)    (EventSink)   (EventSink) │
//! │  JsonConfigFile (ConfigPort)                            │
//! │                                                         │
//! │  ────────────── Port Trait Boundary ───────────────     │
//! │                                                         │
//! │  ┌──────────────────────────────────────────────────┐   │
//! │  │        ControlLoop → FuzzyController (pure)      │   │
//! │  └──────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use tracing_subscriber::filter::LevelFilter;

use fuzzytherm::adapters::config_file::JsonConfigFile;
use fuzzytherm::adapters::log_sink::LogEventSink;
use fuzzytherm::adapters::time::SimClock;
use fuzzytherm::adapters::trace::TraceRecorder;
use fuzzytherm::app::ports::ConfigPort;
use fuzzytherm::app::service::ControlLoop;
use fuzzytherm::config::AppConfig;
use fuzzytherm::sim::FirstOrderPlant;

#[derive(Parser, Debug)]
#[command(name = "fuzzytherm", about = "Run the fuzzy heater controller against a simulated plant")]
struct Cli {
    /// JSON configuration file (missing fields take defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of control ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Override the target temperature (°C)
    #[arg(long)]
    target: Option<f64>,

    /// Tick at which to step the target to `--step-target`
    #[arg(long, requires = "step_target")]
    step_at: Option<u64>,

    /// Target temperature (°C) applied at `--step-at`
    #[arg(long, requires = "step_at")]
    step_target: Option<f64>,

    /// Log every Nth telemetry tick
    #[arg(long, default_value_t = 60)]
    log_every: u64,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => JsonConfigFile::new(path)
            .load()
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(target) = cli.target {
        config.target_temperature_c = target;
    }
    config.validate().context("validating config overrides")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .init();

    let config = load_config(&cli)?;
    info!("FuzzyTherm simulation: {} ticks @ {} ms", cli.ticks, config.tick_interval_ms);

    let mut control = ControlLoop::new(&config).context("building control loop")?;
    let mut plant = FirstOrderPlant::from_config(&config);
    let mut clock = SimClock::new();
    let mut sinks = (
        LogEventSink::every(cli.log_every),
        TraceRecorder::new(config.trace_capacity),
    );

    if plant.steady_state_c(100.0) <= config.target_temperature_c {
        warn!(
            "plant ceiling {:.1} °C is below target {:.1} °C; target is unreachable",
            plant.steady_state_c(100.0),
            config.target_temperature_c
        );
    }

    control.start(&clock, &mut sinks);

    for tick in 1..=cli.ticks {
        if let (Some(at), Some(to)) = (cli.step_at, cli.step_target) {
            if tick == at {
                control.set_target(to, &mut sinks);
            }
        }
        control.tick(&clock, &mut plant, &mut sinks);
        clock.advance(control.tick_interval());
    }

    match sinks.1.summary() {
        Some(s) => info!(
            "SUMMARY | last {} points | final T={:.2}\u{00b0}C target={:.2}\u{00b0}C | \
             mean heater={:.1}% | overshoot={:.2}\u{00b0}C",
            s.points,
            s.final_temperature_c,
            control.target(),
            s.mean_output_percent,
            s.overshoot_c,
        ),
        None => info!("SUMMARY | no ticks simulated"),
    }

    Ok(())
}
