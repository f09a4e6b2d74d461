//! Application core: loop orchestration, zero I/O.
//!
//! This module ties the fuzzy controller to a clock, a plant, and an
//! event sink.  All interaction with the outside world happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable with a synthetic clock and a mock plant.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
