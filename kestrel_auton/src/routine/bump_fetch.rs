//! Bump-side fetch routine.
//!
//! Starting from the scoring position nearest the loading zone: score the
//! preloaded piece, drive the bump route to the nearest midfield game
//! piece, pick it up, and bring it back toward the scoring table.

use std::cell::Cell;
use std::rc::Rc;

use tracing::info;

use kestrel_common::cal;
use kestrel_common::context::MatchContext;
use kestrel_common::resources::SubsystemSet;

use crate::command::{
    CommandExt, InstantCommand, ParallelDeadlineGroup, RunCommand, SequentialGroup, WaitCommand,
};
use crate::error::RoutineError;
use crate::routine::components::{intake_sequence, score_preloaded_piece};
use crate::subsystems::SubsystemHandles;
use crate::trajectory::{PathConstraints, TrajectoryProvider, load_alliance_path};

/// Pose X travel at which the midfield game piece is reached [m].
const DISTANCE_AT_PIECE_METERS: f64 = 5.9;
/// Normalized forward speed while creeping onto the piece.
const NORM_SPEED_INTAKING: f64 = 0.3;
/// Dwell before the creep starts, giving the intake time to deploy [s].
const INTAKE_SPINUP_SECONDS: f64 = 0.5;

/// Build the routine for this match's context. Trajectory variants are
/// alliance-resolved here and captured by the tree.
pub fn bump_side_fetch(
    context: &MatchContext,
    handles: &SubsystemHandles,
    paths: &dyn TrajectoryProvider,
) -> Result<SequentialGroup, RoutineError> {
    let constraints = PathConstraints::new(
        cal::swerve::VERY_SLOW_LINEAR_SPEED_METERS_PER_SEC,
        cal::swerve::VERY_SLOW_LINEAR_ACCELERATION_METERS_PER_SEC_SQ,
    );
    let outbound = load_alliance_path(paths, "BumpFetchFirstHalf", constraints, context.alliance)?;
    let inbound = load_alliance_path(paths, "BumpFetchSecondHalf", constraints, context.alliance)?;

    // Start X is captured at runtime, right before the outbound leg, and
    // shared with the creep-distance predicate.
    let start_x = Rc::new(Cell::new(0.0_f64));

    let capture_start_x = {
        let drive = Rc::clone(&handles.drive);
        let start_x = Rc::clone(&start_x);
        InstantCommand::new(SubsystemSet::empty(), move || {
            start_x.set(drive.current_pose().x_meters);
        })
    };

    let aim_at_piece = {
        let drive = Rc::clone(&handles.drive);
        let vision = Rc::clone(&handles.vision);
        InstantCommand::new(SubsystemSet::VISION, move || {
            // No target acquired → keep the current heading.
            let offset = vision.angle_to_target_degrees().unwrap_or(0.0);
            drive.offset_heading(offset);
        })
    };

    let creep_to_piece = {
        let drive = Rc::clone(&handles.drive);
        RunCommand::new(SubsystemSet::DRIVE, move || {
            drive.rotate_or_hold_heading(NORM_SPEED_INTAKING, 0.0, 0.0, false, None);
        })
        .until({
            let drive = Rc::clone(&handles.drive);
            let start_x = Rc::clone(&start_x);
            move || drive.current_pose().x_meters - start_x.get() > DISTANCE_AT_PIECE_METERS
        })
    };

    let fetch_deadline = SequentialGroup::new()
        .then(WaitCommand::new(INTAKE_SPINUP_SECONDS))
        .then(creep_to_piece);

    let safed_intake = intake_sequence(&handles.intake, &handles.lift, &handles.lights).finally({
        let intake = Rc::clone(&handles.intake);
        let lift = Rc::clone(&handles.lift);
        move |_interrupted| {
            lift.home();
            lift.close_grabber();
            intake.set_deployed(false);
            intake.set_clamped(false);
            intake.stop_intaking();
        }
    });

    let fetch = ParallelDeadlineGroup::new(fetch_deadline).with(safed_intake);

    let routine = SequentialGroup::new()
        .require(
            SubsystemSet::DRIVE | SubsystemSet::INTAKE | SubsystemSet::LIFT | SubsystemSet::VISION,
        )
        .then(score_preloaded_piece(
            context.speed_profile,
            &handles.lift,
            &handles.lights,
        ))
        .then(capture_start_x)
        .then(handles.drive.follow_trajectory(&outbound, true))
        .then(aim_at_piece)
        .then(fetch)
        .then(handles.drive.follow_trajectory(&inbound, false));

    info!(
        "Built bump-side fetch routine ({:?}, {:?} profile, {} steps)",
        context.alliance,
        context.speed_profile,
        routine.len()
    );
    Ok(routine)
}
