//! Motion-profile shaping.
//!
//! Steps an intermediate setpoint toward the latched target under velocity
//! and acceleration limits (trapezoidal, with a stop-distance guard) and
//! tracks the at-target settle dwell.

use kestrel_common::consts;

/// Motion-profile limits for a profiled mechanism loop.
#[derive(Debug, Clone, Copy)]
pub struct MotionProfileLimits {
    /// Maximum profile velocity [units/s].
    pub max_velocity: f64,
    /// Maximum profile acceleration [units/s²].
    pub max_acceleration: f64,
    /// Minimum commanded velocity while the profile is still moving
    /// [units/s]. Keeps high-friction mechanisms from stalling short.
    pub min_output_velocity: f64,
    /// Error band treated as "at target" [units].
    pub allowed_error: f64,
}

/// Profile shaping state for one mechanism.
///
/// On the first step after a reset the profile starts from the measured
/// position with zero velocity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileState {
    setpoint: f64,
    velocity: f64,
    initialized: bool,
    settled_cycles: u32,
}

impl ProfileState {
    /// Reset all shaping state; the next step re-seeds from the measurement.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current intermediate setpoint [units].
    #[inline]
    pub fn setpoint(&self) -> f64 {
        self.setpoint
    }

    /// Current profile velocity [units/s].
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// True once the tracked error has stayed inside the allowed band for
    /// the settle dwell.
    #[inline]
    pub fn settled(&self) -> bool {
        self.settled_cycles >= consts::AT_TARGET_DWELL_CYCLES
    }

    /// Advance the intermediate setpoint one cycle toward `target`.
    pub fn step(
        &mut self,
        limits: &MotionProfileLimits,
        target: f64,
        measurement: f64,
        dt: f64,
    ) -> f64 {
        if dt <= 0.0 {
            return self.setpoint;
        }
        if !self.initialized {
            self.setpoint = measurement;
            self.velocity = 0.0;
            self.initialized = true;
        }

        let remaining = target - self.setpoint;
        if remaining == 0.0 && self.velocity == 0.0 {
            return self.setpoint;
        }

        // Largest speed that can still decelerate to rest within the
        // remaining distance.
        let stop_limited = (2.0 * limits.max_acceleration * remaining.abs()).sqrt();
        let mut desired = stop_limited.min(limits.max_velocity) * remaining.signum();
        if remaining.abs() > limits.allowed_error && desired.abs() < limits.min_output_velocity {
            desired = limits.min_output_velocity * remaining.signum();
        }

        let max_dv = limits.max_acceleration * dt;
        self.velocity = desired.clamp(self.velocity - max_dv, self.velocity + max_dv);

        let next = self.setpoint + self.velocity * dt;
        // Never step across the target.
        if (remaining > 0.0 && next >= target) || (remaining < 0.0 && next <= target) {
            self.setpoint = target;
            self.velocity = 0.0;
        } else {
            self.setpoint = next;
        }
        self.setpoint
    }

    /// Record this cycle's loop error for the settle dwell.
    pub fn track_settle(&mut self, limits: &MotionProfileLimits, error: f64) {
        if error.abs() <= limits.allowed_error {
            self.settled_cycles = self.settled_cycles.saturating_add(1);
        } else {
            self.settled_cycles = 0;
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
