//! Chassis-level swerve drive calibrations.

use core::f64::consts::PI;
use static_assertions::const_assert;

/// Trajectory constraint tiers [m/s, m/s²].
pub const MAX_LINEAR_SPEED_METERS_PER_SEC: f64 = 4.0;
pub const MAX_LINEAR_ACCELERATION_METERS_PER_SEC_SQ: f64 = 3.0;

/// Constraint tier for routes crossing the cable protector / bump.
pub const VERY_SLOW_LINEAR_SPEED_METERS_PER_SEC: f64 = 1.5;
pub const VERY_SLOW_LINEAR_ACCELERATION_METERS_PER_SEC_SQ: f64 = 1.5;

/// Angular offset of the modules relative to the zeroing fixture [rad].
/// Common to all modules.
pub const SWERVE_COMMON_ANGULAR_OFFSET_RAD: f64 = super::PLACEHOLDER_DOUBLE;

/// Angular offsets of the modules relative to the chassis [rad]. The
/// modules form an O when fixtured, so they are iteratively 90 deg from
/// each other.
pub const FRONT_LEFT_CHASSIS_ANGULAR_OFFSET_RAD: f64 =
    SWERVE_COMMON_ANGULAR_OFFSET_RAD - (3.0 * PI / 4.0);
pub const FRONT_RIGHT_CHASSIS_ANGULAR_OFFSET_RAD: f64 =
    SWERVE_COMMON_ANGULAR_OFFSET_RAD - (PI / 4.0);
pub const BACK_LEFT_CHASSIS_ANGULAR_OFFSET_RAD: f64 =
    SWERVE_COMMON_ANGULAR_OFFSET_RAD + (3.0 * PI / 4.0);
pub const BACK_RIGHT_CHASSIS_ANGULAR_OFFSET_RAD: f64 =
    SWERVE_COMMON_ANGULAR_OFFSET_RAD + (PI / 4.0);

/// Controller on module speed for rotating to target.
/// Input degrees [-180, 180], output [0, 1].
pub const ROTATE_TO_TARGET_P: f64 = 0.030;
pub const ROTATE_TO_TARGET_I: f64 = 0.0;
pub const ROTATE_TO_TARGET_D: f64 = 0.000;

/// Feedforward for rotating to target, added to or subtracted from the
/// closed-loop output depending on rotation direction.
pub const ROTATE_TO_TARGET_FF: f64 = 0.1;

/// Auton path-following controllers (field X/Y in meters).
pub const PATH_X_P: f64 = 0.100506;
pub const PATH_X_I: f64 = 0.0;
pub const PATH_X_D: f64 = 0.0;
pub const PATH_Y_P: f64 = 0.1;
pub const PATH_Y_I: f64 = 0.0;
pub const PATH_Y_D: f64 = 0.0;

/// Heading controller under high profile constraints = PD controller.
pub const PATH_THETA_P: f64 = 9.0;
pub const PATH_THETA_I: f64 = 0.0;
pub const PATH_THETA_D: f64 = 0.80;

const_assert!(VERY_SLOW_LINEAR_SPEED_METERS_PER_SEC <= MAX_LINEAR_SPEED_METERS_PER_SEC);
const_assert!(VERY_SLOW_LINEAR_ACCELERATION_METERS_PER_SEC_SQ <= MAX_LINEAR_ACCELERATION_METERS_PER_SEC_SQ);
