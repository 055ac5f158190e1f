//! Full mocked-drive scenarios.
//!
//! A three-step chain - creep to a field X, turn toward the vision
//! target, then a deadline-bounded fetch - run against a pose script
//! advancing 0.5 m per cycle, with exact cycle bookkeeping.

use std::rc::Rc;

use kestrel_auton::command::{
    CommandExt, CommandSlot, InstantCommand, ParallelDeadlineGroup, RunState, SequentialGroup,
    WaitCommand,
};
use kestrel_auton::routine::components::ChargeStationBalance;
use kestrel_auton::subsystems::{DriveHandle, VisionHandle};
use kestrel_common::cal;
use kestrel_common::resources::SubsystemSet;

use super::common::{Event, ProbeCommand, ScriptedDrive, StubVision, count, new_log};

const PIECE_DISTANCE_METERS: f64 = 5.9;

/// Advance the pose script (0.5 m per cycle, topping out at 6.0 m) and run
/// one control cycle.
fn scripted_tick(drive: &ScriptedDrive, slot: &mut CommandSlot, cycle: u64) {
    drive.set_pose_x((0.5 * cycle as f64).min(6.0));
    slot.tick();
}

#[test]
fn deadline_tears_down_the_intake_the_cycle_the_drive_condition_holds() {
    let log = new_log();
    let drive = ScriptedDrive::new();
    let vision = Rc::new(StubVision::default());
    vision.angle.set(Some(12.0));

    let move_to_piece_x = {
        let drive = drive.clone();
        ProbeCommand::new("move", &log, u64::MAX)
            .until(move || drive.current_pose().x_meters >= PIECE_DISTANCE_METERS)
    };

    let turn_to_target = {
        let drive = drive.clone();
        let vision: Rc<dyn VisionHandle> = vision.clone();
        InstantCommand::new(SubsystemSet::VISION, move || {
            let offset = vision.angle_to_target_degrees().unwrap_or(0.0);
            drive.offset_heading(offset);
        })
    };

    let drive_until = {
        let drive = drive.clone();
        ProbeCommand::new("drive_until", &log, u64::MAX)
            .until(move || drive.current_pose().x_meters > PIECE_DISTANCE_METERS)
    };
    let fetch = ParallelDeadlineGroup::new(
        SequentialGroup::new()
            .then(WaitCommand::new(0.5))
            .then(drive_until),
    )
    .with(ProbeCommand::new("intake", &log, u64::MAX));

    let routine = SequentialGroup::new()
        .then(move_to_piece_x)
        .then(turn_to_target)
        .then(fetch);
    let mut slot = CommandSlot::from_command(routine);
    slot.start();

    // Cycles 1-11: still short of the piece.
    for cycle in 1..=11 {
        scripted_tick(&drive, &mut slot, cycle);
    }
    assert_eq!(count(&log, &Event::End("move", false)), 0);
    assert!(drive.heading_offsets().is_empty());

    // Cycle 12: pose first reaches ≥ 5.9 - the move ends and the turn
    // fires (start runs in the advance cycle) with the vision offset.
    scripted_tick(&drive, &mut slot, 12);
    assert_eq!(count(&log, &Event::End("move", false)), 1);
    assert_eq!(drive.heading_offsets(), vec![12.0]);

    // Cycle 13: the turn finishes; the fetch group starts both members.
    scripted_tick(&drive, &mut slot, 13);
    assert_eq!(count(&log, &Event::Start("intake")), 1);

    // Cycles 14-38: the 0.5 s wait runs out (25 cycles); the drive-until
    // leg starts in the wait's finish cycle. The intake keeps running.
    for cycle in 14..=37 {
        scripted_tick(&drive, &mut slot, cycle);
    }
    assert_eq!(count(&log, &Event::Start("drive_until")), 0);
    scripted_tick(&drive, &mut slot, 38);
    assert_eq!(count(&log, &Event::Start("drive_until")), 1);
    assert_eq!(count(&log, &Event::End("intake", true)), 0);

    // Cycle 39: the drive condition already holds on the first poll -
    // the deadline finishes and the intake is torn down the same cycle,
    // even though its own predicate never held.
    scripted_tick(&drive, &mut slot, 39);
    assert_eq!(count(&log, &Event::End("drive_until", false)), 1);
    assert_eq!(count(&log, &Event::End("intake", true)), 1);
    assert_eq!(slot.state(), RunState::Finished);
}

#[test]
fn balance_command_maps_pitch_to_deadbanded_climb_speed() {
    let drive = ScriptedDrive::new();
    let handle: Rc<dyn DriveHandle> = drive.clone();
    let mut slot = CommandSlot::from_command(ChargeStationBalance::new(&handle));
    slot.start();

    // Nose fully down: climb at the calibrated limit.
    drive.set_pitch(-kestrel_common::consts::MAX_PITCH_DEGREES);
    slot.tick();
    let (x, _, _) = drive.commanded()[0];
    assert!((x - cal::balance::MAX_CHARGE_STATION_CLIMB_NORM_SPEED).abs() < 1e-9);

    // Near level: inside the deadband, hold position.
    drive.set_pitch(1.0);
    slot.tick();
    let (x, _, _) = drive.commanded()[1];
    assert_eq!(x, 0.0);

    // The match-phase end interrupts the balancer; the drive must stop.
    slot.interrupt();
    assert_eq!(drive.stops(), 1);
}
