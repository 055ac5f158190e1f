//! Lift calibrations: elevator and arm loops, grabber zones, and timing.

use static_assertions::const_assert;

/// Elevator position loop. Input inches, output [0, 1].
pub const ELEVATOR_P: f64 = super::PLACEHOLDER_DOUBLE;
pub const ELEVATOR_I: f64 = super::PLACEHOLDER_DOUBLE;
pub const ELEVATOR_D: f64 = super::PLACEHOLDER_DOUBLE;

/// Arm position loop. Input deg, output [0, 1].
pub const ARM_P: f64 = super::PLACEHOLDER_DOUBLE;
pub const ARM_I: f64 = super::PLACEHOLDER_DOUBLE;
pub const ARM_D: f64 = super::PLACEHOLDER_DOUBLE;

/// Absolute encoder position when the arm is at 0 degrees.
pub const ARM_ABSOLUTE_ENCODER_ZERO_POS_DEG: f64 = super::PLACEHOLDER_DOUBLE;

/// Absolute encoder reading when the elevator is at the start (zero)
/// position.
pub const ELEVATOR_ABS_ENCODER_POS_AT_START_INCHES: f64 = super::PLACEHOLDER_DOUBLE;

/// Voltage required to hold the arm in the horizontal position.
// Stall torque: 3.36 Nm * 75 = 252 Nm
// Max torque: 3.4 kg * 9.81 (N/kg) * 0.68m = 22.68 Nm
// Ratio: 1.08 V
pub const ARBITRARY_ARM_FEED_FORWARD_VOLTS: f64 = 1.0;

/// Voltage required to hold the elevator.
// Stall force: 2 * 1.08 Nm * 14.11 / (0.5625 / 39.37) m = 2133 N
// Max force: 6.4 kg * 9.81 N/kg = 63 N
// Ratio: 0.32 V
pub const ARBITRARY_ELEVATOR_FEED_FORWARD_VOLTS: f64 = 0.3;

/// Arm motion-profile limits.
// Angular accel = Torque / Inertia.
// Stall torque: 3.36 Nm * 75 = 252 Nm
// Inertia: 3.4 kg * 0.68^2 m^2 = 1.57 kg-m^2
// Accel = 160.5 rad/s^2 = 9200 deg/s^2
pub const ARM_MAX_ACCELERATION_DEG_PER_SECOND_SQUARED: f64 = 1600.0;
// 5880 rpm / (60 sec/min) / 75 * (360 deg / rev) = 470
pub const ARM_MAX_VELOCITY_DEG_PER_SECOND: f64 = 400.0;
pub const ARM_MIN_OUTPUT_VELOCITY_DEG_PER_SECOND: f64 = 3.0;
pub const ARM_ALLOWED_CLOSED_LOOP_ERROR_DEG: f64 = 1.0;

/// Elevator motion-profile limits.
// accel = Force / mass.
// Stall force: 2 * 1.08 Nm * 14.11 / (0.5625 / 39.37) m = 2133 N
// mass: 6.4 kg
// Accel = 333 m/s^2
pub const ELEVATOR_MAX_ACCELERATION_IN_PER_SECOND_SQUARED: f64 = 160.0;
// 11710 rpm / (60 sec/min) / 14.11 * (pi * 1.125 in) = 48.9 in/s
pub const ELEVATOR_MAX_VELOCITY_IN_PER_SECOND: f64 = 40.0;
pub const ELEVATOR_MIN_OUTPUT_VELOCITY_IN_PER_SECOND: f64 = 0.5;
pub const ELEVATOR_ALLOWED_CLOSED_LOOP_ERROR_IN: f64 = 0.25;

/// Elevator scoring positions [in].
pub const ELEVATOR_LOW_POSITION_INCHES: f64 = 0.0;
pub const ELEVATOR_HIGH_POSITION_INCHES: f64 = 20.83;

/// Min and max positions the elevator and arm motors are allowed to reach.
pub const ELEVATOR_POSITIVE_LIMIT_INCHES: f32 = 20.83;
pub const ELEVATOR_NEGATIVE_LIMIT_INCHES: f32 = 0.0;
pub const ARM_POSITIVE_LIMIT_DEGREES: f32 = 273.0;
pub const ARM_NEGATIVE_LIMIT_DEGREES: f32 = 74.0;

/// Threshold for when the lift is out of the zone where the intake moves.
pub const ARM_INTAKE_ZONE_THRESHOLD_DEGREES: f64 = 114.0;

/// Margin for when we consider the lift has reached a position. Logical
/// (for deciding where the lift can go next), not functional - reaching it
/// does not stop arm control. Broader margins apply to the Starting
/// position because the lift transits through it.
pub const ELEVATOR_MARGIN_INCHES: f64 = 0.5;
pub const ARM_MARGIN_DEGREES: f64 = 2.0;
pub const ELEVATOR_START_MARGIN_INCHES: f64 = 1.0;
pub const ARM_START_MARGIN_DEGREES: f64 = 8.0;

/// Zone where the grabber must be closed [deg]. Bottom is closer to the
/// intake.
pub const GRABBER_CLOSED_ZONE_BOTTOM_DEGREES: f64 = super::PLACEHOLDER_DOUBLE;
pub const GRABBER_CLOSED_ZONE_TOP_DEGREES: f64 = super::PLACEHOLDER_DOUBLE;

/// Time between the grabber opening or closing and the intake unclamping
/// [s].
pub const GRABBER_CLOSE_TIME_SECONDS: f64 = 0.2;
pub const GRABBER_OPEN_TIME_SECONDS: f64 = 0.2;

/// Time for the grabber to open when outtaking [s].
pub const OUTTAKE_GRABBER_WAIT_TIME_SECONDS: f64 = 0.2;

/// Time until it is safe to return to the starting position from the
/// scoring-high position [s].
pub const SAFE_TO_RETURN_TO_START_SECONDS: f64 = 0.5;

const_assert!(ELEVATOR_LOW_POSITION_INCHES < ELEVATOR_HIGH_POSITION_INCHES);
const_assert!(ARM_NEGATIVE_LIMIT_DEGREES < ARM_POSITIVE_LIMIT_DEGREES);
const_assert!(ELEVATOR_MARGIN_INCHES > 0.0);
const_assert!(ARM_MARGIN_DEGREES > 0.0);
