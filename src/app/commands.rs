//! Inbound commands to the control loop.
//!
//! These represent actions requested by the outside world (operator UI,
//! scripted setpoint schedule) that the
//! [`ControlLoop`](super::service::ControlLoop) interprets and acts upon.

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Change the target temperature (°C), effective next tick.
    SetTarget(f64),

    /// Clear derivative history; the next tick acts as a first sample.
    ResetController,
}
