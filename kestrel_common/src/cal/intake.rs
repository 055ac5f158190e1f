//! Intake calibrations: roller powers, deploy-arm loop, and clamp timing.

use static_assertions::const_assert;

/// Roller powers, normalized [-1, 1].
pub const INTAKING_POWER: f64 = 1.0;
pub const EJECTION_POWER: f64 = -1.0;

/// Deploy-arm position loop. Input deg, output [0, 1].
pub const DEPLOY_MOTOR_P: f64 = super::PLACEHOLDER_DOUBLE;
pub const DEPLOY_MOTOR_I: f64 = super::PLACEHOLDER_DOUBLE;
pub const DEPLOY_MOTOR_D: f64 = super::PLACEHOLDER_DOUBLE;

/// Intake positions [deg].
pub const STARTING_POSITION_DEGREES: f64 = 38.0;
pub const DEPLOYED_POSITION_DEGREES: f64 = 180.0;

/// Past this position, the intake is free to clamp.
pub const CLAMP_POSITION_THRESHOLD_DEGREES: f64 = 110.0;

/// Absolute encoder position when the arm is at 0 degrees.
pub const ABSOLUTE_ENCODER_START_POS_DEG: f64 = super::PLACEHOLDER_DOUBLE;

/// Voltage required to hold the intake in the horizontal position.
// Stall torque: 3.36 Nm * 75 = 252 Nm
// Max torque: 6 kg * 9.81 (N/kg) * 0.26m = 15.3 Nm
// Ratio: 0.73 V
pub const ARBITRARY_FEED_FORWARD_VOLTS: f64 = 0.7;

/// Deploy-arm motion-profile limits.
// angular accel = Torque / Inertia.
// 3.36 Nm * 75 / (6 * 0.26^2) kg-m^2 * (360 deg / 2pi rad) = 35600 deg/s^2
pub const DEPLOY_MAX_ACCELERATION_DEG_PER_SECOND_SQUARED: f64 = 1600.0;
// 5880 rpm / (60 sec/min) * (360 deg/rev) / 75 = 470.4
pub const DEPLOY_MAX_VELOCITY_DEG_PER_SECOND: f64 = 400.0;
pub const DEPLOY_MIN_OUTPUT_VELOCITY_DEG_PER_SECOND: f64 = 3.0;
pub const DEPLOY_ALLOWED_CLOSED_LOOP_ERROR_DEG: f64 = 3.0;

/// Margin for having achieved the desired intake position [deg].
pub const POSITION_MARGIN_DEGREES: f64 = 3.0;

/// Min and max positions the deploy motor is allowed to reach [deg].
pub const DEPLOY_MOTOR_POSITIVE_LIMIT_DEGREES: f32 = DEPLOYED_POSITION_DEGREES as f32;
pub const DEPLOY_MOTOR_NEGATIVE_LIMIT_DEGREES: f32 = STARTING_POSITION_DEGREES as f32;

/// Time for the intake to unclamp [s].
pub const UNCLAMP_TIME_SECONDS: f64 = 0.2;

const_assert!(STARTING_POSITION_DEGREES < CLAMP_POSITION_THRESHOLD_DEGREES);
const_assert!(CLAMP_POSITION_THRESHOLD_DEGREES < DEPLOYED_POSITION_DEGREES);
const_assert!(POSITION_MARGIN_DEGREES > 0.0);
