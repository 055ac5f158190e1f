//! PID controller with integral clamping anti-windup.
//!
//! Zero Ki disables integral; zero Kd disables derivative.

/// Internal state of the PID controller.
///
/// Preserves the integral accumulator and previous error across cycles.
/// Reset whenever the owning command re-arms the mechanism.
#[derive(Debug, Clone, Copy, Default)]
pub struct PidState {
    /// Integral accumulator (already Ki-scaled).
    integral: f64,
    /// Previous position error (for derivative).
    prev_error: f64,
}

impl PidState {
    /// Reset all internal state to zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// PID gains for one mechanism loop.
#[derive(Debug, Clone, Copy)]
pub struct PidGains {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain (0 = disabled).
    pub ki: f64,
    /// Derivative gain (0 = disabled).
    pub kd: f64,
    /// Output saturation magnitude - bounds the integral term alone so the
    /// accumulator cannot wind up past what the output stage can apply.
    pub out_max: f64,
}

/// Compute one PID cycle.
///
/// # Arguments
/// - `state`: Mutable PID internal state.
/// - `gains`: PID gains for this mechanism.
/// - `error`: Current error (setpoint − measurement).
/// - `dt`: Cycle period [s].
///
/// # Returns
/// PID output (unsaturated - the binding clamps after adding feedforward).
#[inline]
pub fn pid_compute(state: &mut PidState, gains: &PidGains, error: f64, dt: f64) -> f64 {
    if dt <= 0.0 {
        return 0.0;
    }

    let p_term = gains.kp * error;

    let i_term = if gains.ki != 0.0 {
        state.integral += gains.ki * error * dt;
        if gains.out_max > 0.0 {
            state.integral = state.integral.clamp(-gains.out_max, gains.out_max);
        }
        state.integral
    } else {
        // Ki == 0 → integral disabled, accumulator stays at 0.
        state.integral = 0.0;
        0.0
    };

    let d_term = if gains.kd != 0.0 {
        gains.kd * (error - state.prev_error) / dt
    } else {
        0.0
    };

    state.prev_error = error;

    p_term + i_term + d_term
}

// ─── Tests ──────────────────────────────────────────────────────────
