//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  All tests run on the host with a synthetic
//! clock; no wall-clock sleeps.

mod config_tests;
mod control_loop_tests;
mod mock_plant;
