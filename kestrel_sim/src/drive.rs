//! Simulated swerve drive.
//!
//! Integrates commanded normalized chassis speeds into a field pose once
//! per cycle. Trajectory following is modeled as driving +X at the
//! trajectory's constraint velocity for its nominal duration.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use kestrel_auton::command::Command;
use kestrel_auton::subsystems::DriveHandle;
use kestrel_auton::trajectory::Trajectory;
use kestrel_common::consts;
use kestrel_common::geom::{Pose2d, normalize_degrees};
use kestrel_common::resources::SubsystemSet;

#[derive(Debug, Default)]
struct DriveState {
    pose: Pose2d,
    pitch_degrees: f64,
    /// Commanded normalized chassis speeds [-1, 1].
    commanded_x: f64,
    commanded_y: f64,
    heading_target_degrees: f64,
}

/// Simulated drive base. Clones share the same chassis.
#[derive(Clone)]
pub struct SimDrive {
    state: Rc<RefCell<DriveState>>,
}

impl SimDrive {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(DriveState::default())),
        }
    }

    /// Advance pose integration one cycle.
    pub fn step(&self, dt: f64) {
        let mut state = self.state.borrow_mut();
        let v = consts::MAX_SPEED_METERS_PER_SECOND;
        state.pose.x_meters += state.commanded_x * v * dt;
        state.pose.y_meters += state.commanded_y * v * dt;
        // Heading servo is much faster than the chassis - model it as
        // settled within one cycle.
        state.pose.heading_degrees = state.heading_target_degrees;
    }

    pub fn pose(&self) -> Pose2d {
        self.state.borrow().pose
    }

    /// Scripted pitch input for charge-station scenarios.
    pub fn set_pitch_degrees(&self, degrees: f64) {
        self.state.borrow_mut().pitch_degrees = degrees;
    }
}

impl Default for SimDrive {
    fn default() -> Self {
        Self::new()
    }
}

impl DriveHandle for SimDrive {
    fn current_pose(&self) -> Pose2d {
        self.state.borrow().pose
    }

    fn pitch_degrees(&self) -> f64 {
        self.state.borrow().pitch_degrees
    }

    fn follow_trajectory(
        &self,
        trajectory: &Trajectory,
        reset_odometry: bool,
    ) -> Box<dyn Command> {
        Box::new(FollowTrajectory {
            drive: self.clone(),
            trajectory: trajectory.clone(),
            reset_odometry,
            remaining_cycles: 0,
        })
    }

    fn offset_heading(&self, angle_degrees: f64) {
        let mut state = self.state.borrow_mut();
        state.heading_target_degrees =
            normalize_degrees(state.heading_target_degrees + angle_degrees);
    }

    fn rotate_or_hold_heading(
        &self,
        x: f64,
        y: f64,
        _rotation: f64,
        _field_relative: bool,
        override_heading_degrees: Option<f64>,
    ) {
        let mut state = self.state.borrow_mut();
        state.commanded_x = x.clamp(-1.0, 1.0);
        state.commanded_y = y.clamp(-1.0, 1.0);
        if let Some(heading) = override_heading_degrees {
            state.heading_target_degrees = normalize_degrees(heading);
        }
    }

    fn stop(&self) {
        let mut state = self.state.borrow_mut();
        state.commanded_x = 0.0;
        state.commanded_y = 0.0;
    }
}

/// Tracks a trajectory by driving +X at the constraint velocity for the
/// trajectory's nominal duration.
struct FollowTrajectory {
    drive: SimDrive,
    trajectory: Trajectory,
    reset_odometry: bool,
    remaining_cycles: u64,
}

impl Command for FollowTrajectory {
    fn requirements(&self) -> SubsystemSet {
        SubsystemSet::DRIVE
    }

    fn start(&mut self) {
        self.remaining_cycles =
            (self.trajectory.duration_s / consts::CYCLE_TIME_S).ceil() as u64;
        if self.reset_odometry {
            debug!("Odometry seeded from start of '{}'", self.trajectory.name);
        }
        let norm = (self.trajectory.constraints.max_velocity_mps
            / consts::MAX_SPEED_METERS_PER_SECOND)
            .clamp(0.0, 1.0);
        self.drive.rotate_or_hold_heading(norm, 0.0, 0.0, true, None);
        debug!(
            "Following '{}' for {:.1}s",
            self.trajectory.name, self.trajectory.duration_s
        );
    }

    fn execute(&mut self) {
        self.remaining_cycles = self.remaining_cycles.saturating_sub(1);
    }

    fn is_finished(&self) -> bool {
        self.remaining_cycles == 0
    }

    fn end(&mut self, _interrupted: bool) {
        self.drive.stop();
    }
}
