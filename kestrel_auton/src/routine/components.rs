//! Reusable sub-routines shared by the autonomous builders.

use std::rc::Rc;

use kestrel_common::cal;
use kestrel_common::context::SpeedProfile;
use kestrel_common::resources::SubsystemSet;

use crate::command::{Command, InstantCommand, RunCommand, SequentialGroup, WaitCommand,
    WaitUntilCommand};
use crate::subsystems::{DriveHandle, IntakeHandle, LiftHandle, LightsHandle, LightsMode};

/// Score the game piece held at match start: raise the lift, release the
/// grabber, and come back home. The `Fast` profile skips the settle dwell
/// before homing.
pub fn score_preloaded_piece(
    profile: SpeedProfile,
    lift: &Rc<dyn LiftHandle>,
    lights: &Rc<dyn LightsHandle>,
) -> SequentialGroup {
    let raise = {
        let lift = Rc::clone(lift);
        let lights = Rc::clone(lights);
        InstantCommand::new(SubsystemSet::LIFT | SubsystemSet::LIGHTS, move || {
            lights.set_mode(LightsMode::Scoring);
            lift.raise_to_score_high();
        })
    };
    let settle = {
        let lift = Rc::clone(lift);
        WaitUntilCommand::new(move || lift.at_scoring_position())
    };
    let release = {
        let lift = Rc::clone(lift);
        InstantCommand::new(SubsystemSet::LIFT, move || lift.open_grabber())
    };
    let home = {
        let lift = Rc::clone(lift);
        let lights = Rc::clone(lights);
        InstantCommand::new(SubsystemSet::LIFT | SubsystemSet::LIGHTS, move || {
            lift.home();
            lights.set_mode(LightsMode::Idle);
        })
    };

    let mut group = SequentialGroup::new()
        .then(raise)
        .then(settle)
        .then(release)
        .then(WaitCommand::new(cal::lift::OUTTAKE_GRABBER_WAIT_TIME_SECONDS));
    if profile == SpeedProfile::Normal {
        group = group.then(WaitCommand::new(cal::lift::SAFE_TO_RETURN_TO_START_SECONDS));
    }
    group.then(home)
}

/// Deploy the intake and run the rollers until torn down.
///
/// Open-ended by design: the sequence never finishes on its own and is
/// always run under a deadline group, wrapped in a cleanup decorator that
/// safes the intake and lift.
pub fn intake_sequence(
    intake: &Rc<dyn IntakeHandle>,
    lift: &Rc<dyn LiftHandle>,
    lights: &Rc<dyn LightsHandle>,
) -> SequentialGroup {
    let deploy = {
        let intake = Rc::clone(intake);
        let lift = Rc::clone(lift);
        let lights = Rc::clone(lights);
        InstantCommand::new(
            SubsystemSet::INTAKE | SubsystemSet::LIFT | SubsystemSet::LIGHTS,
            move || {
                lights.set_mode(LightsMode::Intaking);
                // Grabber open for the handoff while the piece comes in.
                lift.open_grabber();
                intake.set_deployed(true);
                intake.set_clamped(false);
            },
        )
    };
    let wait_for_clamp_zone = {
        let intake = Rc::clone(intake);
        WaitUntilCommand::new(move || {
            intake.deploy_position_degrees() >= cal::intake::CLAMP_POSITION_THRESHOLD_DEGREES
        })
    };
    let clamp_and_run = {
        let intake = Rc::clone(intake);
        InstantCommand::new(SubsystemSet::INTAKE, move || {
            intake.set_clamped(true);
            intake.start_intaking();
        })
    };
    // Rollers keep pulling until the enclosing group tears the sequence
    // down.
    let hold = RunCommand::new(SubsystemSet::empty(), || {});

    SequentialGroup::new()
        .then(deploy)
        .then(wait_for_clamp_zone)
        .then(clamp_and_run)
        .then(hold)
}

/// Holds the robot level on the charge station.
///
/// Pitch maps to a normalized climb velocity through the calibrated
/// conversion, with a deadband near level. Never finishes on its own -
/// the match-phase end interrupts it, and `end` always stops the drive.
pub struct ChargeStationBalance {
    drive: Rc<dyn DriveHandle>,
}

impl ChargeStationBalance {
    pub fn new(drive: &Rc<dyn DriveHandle>) -> Self {
        Self {
            drive: Rc::clone(drive),
        }
    }
}

impl Command for ChargeStationBalance {
    fn requirements(&self) -> SubsystemSet {
        SubsystemSet::DRIVE
    }

    fn start(&mut self) {}

    fn execute(&mut self) {
        let pitch = self.drive.pitch_degrees();
        let mut speed = (pitch / cal::balance::CHARGE_STATION_PITCH_DEGREES_TO_NORM_VELOCITY)
            .clamp(
                -cal::balance::MAX_CHARGE_STATION_CLIMB_NORM_SPEED,
                cal::balance::MAX_CHARGE_STATION_CLIMB_NORM_SPEED,
            );
        if speed.abs() <= cal::balance::CHARGE_STATION_DEADBAND_NORM_VELOCITY {
            speed = 0.0;
        }
        self.drive
            .rotate_or_hold_heading(speed, 0.0, 0.0, false, None);
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn end(&mut self, _interrupted: bool) {
        self.drive.stop();
    }
}
