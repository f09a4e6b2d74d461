//! Headless plant simulation.
//!
//! Stands in for the physical heater so the control loop can be run and
//! tested on the host without hardware.

pub mod plant;

pub use plant::FirstOrderPlant;
