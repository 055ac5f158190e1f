//! Calibrations: arbitrary but tuned values, like PID gains.
//!
//! One module per subsystem namespace. All values are compiled-in constants,
//! never mutated after process start. Derived values are computed in const
//! expressions, never re-derived per use.
//!
//! Values still awaiting tuning on the real robot are spelled
//! `PLACEHOLDER_*` at the use site, so a search for `PLACEHOLDER` surfaces
//! every untuned entry.

pub mod balance;
pub mod intake;
pub mod lift;
pub mod swerve;
pub mod swerve_module;

/// Sentinel for an `f64` calibration not yet tuned on the robot.
pub const PLACEHOLDER_DOUBLE: f64 = 0.0;
/// Sentinel for an `f32` calibration not yet tuned on the robot.
pub const PLACEHOLDER_FLOAT: f32 = 0.0;
/// Sentinel for an `i32` calibration not yet tuned on the robot.
pub const PLACEHOLDER_INT: i32 = 0;

/// Motor controller configuration retry attempts during startup.
pub const MOTOR_INIT_RETRY_ATTEMPTS: u32 = 5;
