//! Per-mechanism controller binding.
//!
//! One binding per actuator, constructed once at startup from the
//! calibration table and shared by reference with every command that
//! drives the mechanism. The binding owns the only mutable loop state
//! (PID accumulator, profile shaping) - exactly one running command
//! drives a binding at any time.

use kestrel_common::consts;

use super::feedforward::{FeedforwardGains, feedforward_compute};
use super::pid::{PidGains, PidState, pid_compute};
use super::profile::{MotionProfileLimits, ProfileState};
use crate::error::ControlError;

/// Calibrated closed-loop controller bound to one mechanism.
#[derive(Debug, Clone)]
pub struct ControllerBinding {
    gains: PidGains,
    feedforward: FeedforwardGains,
    out_min: f64,
    out_max: f64,
    profile: Option<MotionProfileLimits>,
    setpoint_range: Option<(f64, f64)>,
    pid: PidState,
    shaping: ProfileState,
}

impl ControllerBinding {
    /// Plain closed loop with output bounds.
    pub fn new(
        gains: PidGains,
        feedforward: FeedforwardGains,
        out_min: f64,
        out_max: f64,
    ) -> Self {
        Self {
            gains,
            feedforward,
            out_min,
            out_max,
            profile: None,
            setpoint_range: None,
            pid: PidState::default(),
            shaping: ProfileState::default(),
        }
    }

    /// Add motion-profile shaping between the latched target and the loop.
    pub fn with_profile(mut self, limits: MotionProfileLimits) -> Self {
        self.profile = Some(limits);
        self
    }

    /// Reject setpoints outside the mechanism's soft limits.
    pub fn with_setpoint_range(mut self, min: f64, max: f64) -> Self {
        self.setpoint_range = Some((min, max));
        self
    }

    /// Reset the accumulator and profile state. Commands call this when
    /// arming the mechanism.
    pub fn reset(&mut self) {
        self.pid.reset();
        self.shaping.reset();
    }

    /// True once the profiled loop has held the error inside the allowed
    /// band for the settle dwell. Always false for unprofiled bindings.
    pub fn at_target(&self) -> bool {
        self.profile.is_some() && self.shaping.settled()
    }

    /// Run one cycle of the closed-loop law plus feedforward, clamped to
    /// the output bounds.
    ///
    /// The default cycle period is assumed; see [`Self::compute_with_dt`].
    pub fn compute(&mut self, setpoint: f64, measurement: f64) -> Result<f64, ControlError> {
        self.compute_with_dt(setpoint, measurement, consts::CYCLE_TIME_S)
    }

    /// [`Self::compute`] with an explicit cycle period.
    pub fn compute_with_dt(
        &mut self,
        setpoint: f64,
        measurement: f64,
        dt: f64,
    ) -> Result<f64, ControlError> {
        self.check_inputs(setpoint, measurement)?;
        let pid = pid_compute(&mut self.pid, &self.gains, setpoint - measurement, dt);
        let ff = feedforward_compute(&self.feedforward, setpoint);
        Ok((pid + ff).clamp(self.out_min, self.out_max))
    }

    /// Run one cycle through the motion profile: the target is approached
    /// by an intermediate setpoint under the configured velocity and
    /// acceleration limits, and [`Self::at_target`] reports the settle
    /// dwell. Falls back to the plain law when no profile is configured.
    pub fn compute_profiled(
        &mut self,
        target: f64,
        measurement: f64,
        dt: f64,
    ) -> Result<f64, ControlError> {
        let Some(limits) = self.profile else {
            return self.compute_with_dt(target, measurement, dt);
        };
        self.check_inputs(target, measurement)?;

        let setpoint = self.shaping.step(&limits, target, measurement, dt);
        self.shaping.track_settle(&limits, target - measurement);

        let pid = pid_compute(&mut self.pid, &self.gains, setpoint - measurement, dt);
        // Feedforward follows the profile velocity, not the raw target.
        let ff = feedforward_compute(&self.feedforward, self.shaping.velocity());
        Ok((pid + ff).clamp(self.out_min, self.out_max))
    }

    fn check_inputs(&self, setpoint: f64, measurement: f64) -> Result<(), ControlError> {
        if !measurement.is_finite() {
            return Err(ControlError::SensorFault { measurement });
        }
        if !setpoint.is_finite() {
            return Err(ControlError::BadSetpoint { setpoint });
        }
        if let Some((min, max)) = self.setpoint_range
            && (setpoint < min || setpoint > max)
        {
            return Err(ControlError::BadSetpoint { setpoint });
        }
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
