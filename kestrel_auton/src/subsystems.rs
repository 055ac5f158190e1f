//! Subsystem capability interfaces.
//!
//! The core drives hardware only through these traits; the real subsystem
//! objects (and the per-tick scheduler that owns them) live outside this
//! crate. All methods take `&self`: the scheduling model is
//! single-threaded and cooperative, so implementations use interior
//! mutability rather than locks, and handles are shared as `Rc<dyn …>`.
//!
//! Sensor-fault fallbacks are decided here, per mechanism, not inside the
//! controller bindings: a missing vision target becomes a zero heading
//! offset; a drive fault degrades to `stop()`.

use std::rc::Rc;

use kestrel_common::geom::Pose2d;

use crate::command::Command;
use crate::trajectory::Trajectory;

/// Swerve drive base.
pub trait DriveHandle {
    /// Latest odometry estimate.
    fn current_pose(&self) -> Pose2d;

    /// Chassis pitch [deg], positive nose-up.
    fn pitch_degrees(&self) -> f64;

    /// Command that tracks `trajectory`, optionally seeding odometry from
    /// the trajectory's start pose when it begins.
    fn follow_trajectory(
        &self,
        trajectory: &Trajectory,
        reset_odometry: bool,
    ) -> Box<dyn Command>;

    /// Rotate the held heading target by `angle_degrees`.
    fn offset_heading(&self, angle_degrees: f64);

    /// Drive at normalized speeds while rotating to - or holding - a
    /// heading. `override_heading_degrees: None` keeps the current target.
    fn rotate_or_hold_heading(
        &self,
        x: f64,
        y: f64,
        rotation: f64,
        field_relative: bool,
        override_heading_degrees: Option<f64>,
    );

    /// Zero all chassis speeds.
    fn stop(&self);
}

/// Game-piece intake: deploy arm, clamp, rollers.
pub trait IntakeHandle {
    fn set_deployed(&self, deployed: bool);
    fn set_clamped(&self, clamped: bool);
    /// Run the rollers at intaking power.
    fn start_intaking(&self);
    fn stop_intaking(&self);
    /// Deploy-arm position [deg].
    fn deploy_position_degrees(&self) -> f64;
}

/// Elevator + arm lift with the game-piece grabber.
pub trait LiftHandle {
    /// Drive the lift to the starting position.
    fn home(&self);
    /// Drive the lift to the high scoring position.
    fn raise_to_score_high(&self);
    /// True once the lift has settled at the scoring position.
    fn at_scoring_position(&self) -> bool;
    fn open_grabber(&self);
    fn close_grabber(&self);
}

/// Target-tracking camera.
pub trait VisionHandle {
    /// Horizontal angle to the best target [deg], `None` when no target is
    /// acquired. Callers fall back to a zero offset - an absent target
    /// must never become a heading command.
    fn angle_to_target_degrees(&self) -> Option<f64>;
}

/// Driver-signal light patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightsMode {
    Idle,
    Intaking,
    HoldingGamePiece,
    Scoring,
}

pub trait LightsHandle {
    fn set_mode(&self, mode: LightsMode);
}

/// The full set of subsystem handles a routine builder needs. Supplied
/// externally at match setup; routines clone the handles they capture.
#[derive(Clone)]
pub struct SubsystemHandles {
    pub drive: Rc<dyn DriveHandle>,
    pub intake: Rc<dyn IntakeHandle>,
    pub lift: Rc<dyn LiftHandle>,
    pub vision: Rc<dyn VisionHandle>,
    pub lights: Rc<dyn LightsHandle>,
}
