//! Physical constants for the Kestrel robot.
//!
//! Single source of truth for invariant robot/field numbers. These are
//! measured or derived properties of the hardware, not tunables - tunables
//! live in [`crate::cal`].

/// Free speed of a drive wheel [m/s], measured at nominal battery voltage.
pub const DRIVE_WHEEL_FREE_SPEED_METERS_PER_SECOND: f64 = 4.46;

/// Maximum achievable chassis speed [m/s].
pub const MAX_SPEED_METERS_PER_SECOND: f64 = 4.8;

/// Chassis pitch when fully tilted on the charge station ramp [deg].
pub const MAX_PITCH_DEGREES: f64 = 15.0;

/// Control loop period [s]. The external scheduler ticks at this rate.
pub const CYCLE_TIME_S: f64 = 0.02;

/// Control cycles per second.
pub const CYCLES_PER_SECOND: f64 = 1.0 / CYCLE_TIME_S;

/// Consecutive in-band cycles before a profiled loop reports "at target".
pub const AT_TARGET_DWELL_CYCLES: u32 = 3;
