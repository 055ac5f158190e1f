//! Charge-station auto-balance calibrations.

use crate::consts;

/// Max speed to climb the charge station [m/s].
pub const MAX_CHARGE_STATION_CLIMB_SPEED_MPS: f64 = 0.5;

/// Max speed to climb the charge station, normalized [-1, 1].
pub const MAX_CHARGE_STATION_CLIMB_NORM_SPEED: f64 =
    MAX_CHARGE_STATION_CLIMB_SPEED_MPS / consts::MAX_SPEED_METERS_PER_SECOND;

/// Conversion factor between the robot pitch [deg] and a normalized
/// velocity [-1, 1] for balancing on the charge station. Divide pitch by
/// this factor to get the balancing velocity.
pub const CHARGE_STATION_PITCH_DEGREES_TO_NORM_VELOCITY: f64 =
    -consts::MAX_PITCH_DEGREES / MAX_CHARGE_STATION_CLIMB_NORM_SPEED;

/// Velocity deadband: the balancer holds position instead of driving when
/// the commanded normalized velocity is at or below this.
pub const CHARGE_STATION_DEADBAND_NORM_VELOCITY: f64 = 0.05;
