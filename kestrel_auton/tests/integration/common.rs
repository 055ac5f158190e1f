//! Shared test doubles: lifecycle probes and scripted subsystems.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kestrel_auton::command::Command;
use kestrel_auton::error::TrajectoryError;
use kestrel_auton::subsystems::{
    DriveHandle, IntakeHandle, LiftHandle, LightsHandle, LightsMode, SubsystemHandles,
    VisionHandle,
};
use kestrel_auton::trajectory::{PathConstraints, Trajectory, TrajectoryProvider};
use kestrel_common::geom::Pose2d;
use kestrel_common::resources::SubsystemSet;

// ── Lifecycle probes ────────────────────────────────────────────────

/// Lifecycle events observed by probes and cleanup hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(&'static str),
    Execute(&'static str),
    End(&'static str, bool),
    Cleanup(&'static str, bool),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Cleanup closure that logs its interrupted flag.
pub fn log_cleanup(log: &EventLog, name: &'static str) -> impl FnMut(bool) + 'static {
    let log = Rc::clone(log);
    move |interrupted| log.borrow_mut().push(Event::Cleanup(name, interrupted))
}

/// Counts occurrences of an exact event.
pub fn count(log: &EventLog, event: &Event) -> usize {
    log.borrow().iter().filter(|e| *e == event).count()
}

/// Records every hook invocation; finishes after `finish_after` executes
/// (`u64::MAX` = never).
pub struct ProbeCommand {
    name: &'static str,
    log: EventLog,
    finish_after: u64,
    executed: u64,
    requirements: SubsystemSet,
}

impl ProbeCommand {
    pub fn new(name: &'static str, log: &EventLog, finish_after: u64) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            finish_after,
            executed: 0,
            requirements: SubsystemSet::empty(),
        }
    }

    pub fn with_requirements(mut self, requirements: SubsystemSet) -> Self {
        self.requirements = requirements;
        self
    }
}

impl Command for ProbeCommand {
    fn requirements(&self) -> SubsystemSet {
        self.requirements
    }
    fn start(&mut self) {
        self.log.borrow_mut().push(Event::Start(self.name));
    }
    fn execute(&mut self) {
        self.executed += 1;
        self.log.borrow_mut().push(Event::Execute(self.name));
    }
    fn is_finished(&self) -> bool {
        self.executed >= self.finish_after
    }
    fn end(&mut self, interrupted: bool) {
        self.log.borrow_mut().push(Event::End(self.name, interrupted));
    }
    fn reset(&mut self) {
        self.executed = 0;
    }
}

// ── Scripted drive ──────────────────────────────────────────────────

/// Drive whose pose and pitch are scripted by the test; records every
/// heading offset and chassis-speed command.
pub struct ScriptedDrive {
    pose: Cell<Pose2d>,
    pitch: Cell<f64>,
    heading_offsets: RefCell<Vec<f64>>,
    commanded: RefCell<Vec<(f64, f64, f64)>>,
    stops: Cell<u32>,
    followed: Rc<RefCell<Vec<(String, bool)>>>,
    /// Cycles a stubbed trajectory-follow command runs for.
    follow_cycles: u64,
}

impl ScriptedDrive {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            pose: Cell::new(Pose2d::default()),
            pitch: Cell::new(0.0),
            heading_offsets: RefCell::new(Vec::new()),
            commanded: RefCell::new(Vec::new()),
            stops: Cell::new(0),
            followed: Rc::new(RefCell::new(Vec::new())),
            follow_cycles: 2,
        })
    }

    pub fn set_pose_x(&self, x_meters: f64) {
        let mut pose = self.pose.get();
        pose.x_meters = x_meters;
        self.pose.set(pose);
    }

    pub fn set_pitch(&self, degrees: f64) {
        self.pitch.set(degrees);
    }

    pub fn pose(&self) -> Pose2d {
        self.pose.get()
    }

    pub fn heading_offsets(&self) -> Vec<f64> {
        self.heading_offsets.borrow().clone()
    }

    pub fn commanded(&self) -> Vec<(f64, f64, f64)> {
        self.commanded.borrow().clone()
    }

    pub fn stops(&self) -> u32 {
        self.stops.get()
    }

    /// Trajectory names and odometry-reset flags, in follow order.
    pub fn followed(&self) -> Vec<(String, bool)> {
        self.followed.borrow().clone()
    }
}

impl DriveHandle for ScriptedDrive {
    fn current_pose(&self) -> Pose2d {
        self.pose.get()
    }
    fn pitch_degrees(&self) -> f64 {
        self.pitch.get()
    }
    fn follow_trajectory(
        &self,
        trajectory: &Trajectory,
        reset_odometry: bool,
    ) -> Box<dyn Command> {
        Box::new(FollowStub {
            log: Rc::clone(&self.followed),
            name: trajectory.name.clone(),
            reset_odometry,
            total_cycles: self.follow_cycles,
            remaining: self.follow_cycles,
        })
    }
    fn offset_heading(&self, angle_degrees: f64) {
        self.heading_offsets.borrow_mut().push(angle_degrees);
    }
    fn rotate_or_hold_heading(
        &self,
        x: f64,
        y: f64,
        rotation: f64,
        _field_relative: bool,
        _override_heading_degrees: Option<f64>,
    ) {
        self.commanded.borrow_mut().push((x, y, rotation));
    }
    fn stop(&self) {
        self.stops.set(self.stops.get() + 1);
    }
}

struct FollowStub {
    log: Rc<RefCell<Vec<(String, bool)>>>,
    name: String,
    reset_odometry: bool,
    total_cycles: u64,
    remaining: u64,
}

impl Command for FollowStub {
    fn requirements(&self) -> SubsystemSet {
        SubsystemSet::DRIVE
    }
    fn start(&mut self) {
        self.remaining = self.total_cycles;
        self.log
            .borrow_mut()
            .push((self.name.clone(), self.reset_odometry));
    }
    fn execute(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
    fn is_finished(&self) -> bool {
        self.remaining == 0
    }
    fn end(&mut self, _interrupted: bool) {}
    fn reset(&mut self) {
        self.remaining = self.total_cycles;
    }
}

// ── Other recording subsystems ──────────────────────────────────────

#[derive(Default)]
pub struct RecordingIntake {
    pub deployed: Cell<bool>,
    pub clamped: Cell<bool>,
    pub running: Cell<bool>,
    pub position_degrees: Cell<f64>,
}

impl IntakeHandle for RecordingIntake {
    fn set_deployed(&self, deployed: bool) {
        self.deployed.set(deployed);
    }
    fn set_clamped(&self, clamped: bool) {
        self.clamped.set(clamped);
    }
    fn start_intaking(&self) {
        self.running.set(true);
    }
    fn stop_intaking(&self) {
        self.running.set(false);
    }
    fn deploy_position_degrees(&self) -> f64 {
        self.position_degrees.get()
    }
}

#[derive(Default)]
pub struct RecordingLift {
    pub home_calls: Cell<u32>,
    pub raise_calls: Cell<u32>,
    pub at_position: Cell<bool>,
    pub grabber_open: Cell<bool>,
}

impl LiftHandle for RecordingLift {
    fn home(&self) {
        self.home_calls.set(self.home_calls.get() + 1);
    }
    fn raise_to_score_high(&self) {
        self.raise_calls.set(self.raise_calls.get() + 1);
    }
    fn at_scoring_position(&self) -> bool {
        self.at_position.get()
    }
    fn open_grabber(&self) {
        self.grabber_open.set(true);
    }
    fn close_grabber(&self) {
        self.grabber_open.set(false);
    }
}

#[derive(Default)]
pub struct StubVision {
    pub angle: Cell<Option<f64>>,
}

impl VisionHandle for StubVision {
    fn angle_to_target_degrees(&self) -> Option<f64> {
        self.angle.get()
    }
}

#[derive(Default)]
pub struct RecordingLights {
    pub history: RefCell<Vec<LightsMode>>,
}

impl LightsHandle for RecordingLights {
    fn set_mode(&self, mode: LightsMode) {
        self.history.borrow_mut().push(mode);
    }
}

// ── Stub trajectory provider ────────────────────────────────────────

/// Accepts every path name, records requests, and counts mirror calls.
#[derive(Default)]
pub struct StubPaths {
    pub requests: RefCell<Vec<String>>,
    pub mirror_calls: Cell<u32>,
}

impl StubPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl TrajectoryProvider for StubPaths {
    fn load_path(
        &self,
        name: &str,
        constraints: PathConstraints,
    ) -> Result<Trajectory, TrajectoryError> {
        self.requests.borrow_mut().push(name.to_owned());
        Ok(Trajectory {
            name: name.to_owned(),
            constraints,
            duration_s: 2.0,
            mirrored: false,
        })
    }

    fn mirror_for_red(&self, mut trajectory: Trajectory) -> Trajectory {
        self.mirror_calls.set(self.mirror_calls.get() + 1);
        trajectory.mirrored = true;
        trajectory
    }
}

// ── Bundled handles ─────────────────────────────────────────────────

pub struct TestRobot {
    pub drive: Rc<ScriptedDrive>,
    pub intake: Rc<RecordingIntake>,
    pub lift: Rc<RecordingLift>,
    pub vision: Rc<StubVision>,
    pub lights: Rc<RecordingLights>,
}

impl TestRobot {
    pub fn new() -> Self {
        Self {
            drive: ScriptedDrive::new(),
            intake: Rc::new(RecordingIntake::default()),
            lift: Rc::new(RecordingLift::default()),
            vision: Rc::new(StubVision::default()),
            lights: Rc::new(RecordingLights::default()),
        }
    }

    pub fn handles(&self) -> SubsystemHandles {
        SubsystemHandles {
            drive: self.drive.clone(),
            intake: self.intake.clone(),
            lift: self.lift.clone(),
            vision: self.vision.clone(),
            lights: self.lights.clone(),
        }
    }
}
