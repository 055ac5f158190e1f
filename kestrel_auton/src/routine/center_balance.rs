//! Center charge-station routine.
//!
//! Score the preloaded piece, mount the charge station from the center
//! starting position, and hold the balance until the period ends.

use tracing::info;

use kestrel_common::cal;
use kestrel_common::context::MatchContext;
use kestrel_common::resources::SubsystemSet;

use crate::command::SequentialGroup;
use crate::error::RoutineError;
use crate::routine::components::{ChargeStationBalance, score_preloaded_piece};
use crate::subsystems::SubsystemHandles;
use crate::trajectory::{PathConstraints, TrajectoryProvider, load_alliance_path};

pub fn center_charge_balance(
    context: &MatchContext,
    handles: &SubsystemHandles,
    paths: &dyn TrajectoryProvider,
) -> Result<SequentialGroup, RoutineError> {
    // The ramp transition tolerates no speed.
    let constraints = PathConstraints::new(
        cal::swerve::VERY_SLOW_LINEAR_SPEED_METERS_PER_SEC,
        cal::swerve::VERY_SLOW_LINEAR_ACCELERATION_METERS_PER_SEC_SQ,
    );
    let to_station =
        load_alliance_path(paths, "CenterToChargeStation", constraints, context.alliance)?;

    let routine = SequentialGroup::new()
        .require(SubsystemSet::DRIVE | SubsystemSet::LIFT)
        .then(score_preloaded_piece(
            context.speed_profile,
            &handles.lift,
            &handles.lights,
        ))
        .then(handles.drive.follow_trajectory(&to_station, true))
        .then(ChargeStationBalance::new(&handles.drive));

    info!(
        "Built center balance routine ({:?}, {} steps)",
        context.alliance,
        routine.len()
    );
    Ok(routine)
}
