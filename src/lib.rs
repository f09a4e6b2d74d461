//! FuzzyTherm library.
//!
//! A fuzzy-logic heating controller (Mamdani min-composition with
//! singleton weighted-average defuzzification) plus the hexagonal ring
//! that runs it: port traits, a control-loop service, adapters, and a
//! headless thermal-plant simulation.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod sim;
