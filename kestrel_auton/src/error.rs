//! Error types for the autonomous core.
//!
//! Nothing here is globally fatal: a routine degrades to "interrupt
//! everything, return to idle", never to a crash, because it runs alongside
//! a live match.

use thiserror::Error;

/// Faults surfaced by a controller binding.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ControlError {
    /// The measurement fed to the closed loop was NaN or infinite.
    ///
    /// The binding never converts a bad measurement into an actuator
    /// command; the owning command chooses the per-mechanism safe fallback
    /// (hold vs. zero output).
    #[error("non-finite measurement fed to closed loop: {measurement}")]
    SensorFault { measurement: f64 },

    /// The requested setpoint was NaN/infinite or outside the mechanism's
    /// soft limits.
    #[error("unusable setpoint: {setpoint}")]
    BadSetpoint { setpoint: f64 },
}

/// Failures loading or transforming path artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    /// No path artifact with this name is deployed.
    #[error("no path artifact named `{0}`")]
    UnknownPath(String),
}

/// Failures building an autonomous routine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutineError {
    #[error("trajectory load failed: {0}")]
    Trajectory(#[from] TrajectoryError),
}
