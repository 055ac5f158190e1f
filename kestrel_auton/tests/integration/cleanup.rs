//! Cleanup decorators fire exactly once, after the child's own end, on
//! every exit path.

use kestrel_auton::command::{CommandExt, CommandSlot, ParallelDeadlineGroup, RunState};

use super::common::{Event, ProbeCommand, count, log_cleanup, new_log};

#[test]
fn cleanup_after_normal_finish() {
    let log = new_log();
    let command = ProbeCommand::new("c", &log, 2).finally(log_cleanup(&log, "c"));
    let mut slot = CommandSlot::from_command(command);

    slot.start();
    slot.tick();
    slot.tick();

    assert_eq!(slot.state(), RunState::Finished);
    assert_eq!(count(&log, &Event::Cleanup("c", false)), 1);
    // Cleanup runs after the child's own end.
    let events = log.borrow();
    let end_at = events
        .iter()
        .position(|e| *e == Event::End("c", false))
        .unwrap();
    let cleanup_at = events
        .iter()
        .position(|e| *e == Event::Cleanup("c", false))
        .unwrap();
    assert!(end_at < cleanup_at);
}

#[test]
fn cleanup_after_direct_interruption() {
    let log = new_log();
    let command = ProbeCommand::new("c", &log, u64::MAX).finally(log_cleanup(&log, "c"));
    let mut slot = CommandSlot::from_command(command);

    slot.start();
    slot.tick();
    slot.interrupt();

    assert_eq!(count(&log, &Event::Cleanup("c", true)), 1);
}

#[test]
fn cleanup_when_an_enclosing_deadline_group_ends() {
    let log = new_log();
    let group = ParallelDeadlineGroup::new(ProbeCommand::new("deadline", &log, 1)).with(
        ProbeCommand::new("bg", &log, u64::MAX).finally(log_cleanup(&log, "bg")),
    );
    let mut slot = CommandSlot::from_command(group);

    slot.start();
    slot.tick();

    assert_eq!(slot.state(), RunState::Finished);
    assert_eq!(count(&log, &Event::End("bg", true)), 1);
    assert_eq!(count(&log, &Event::Cleanup("bg", true)), 1);
}

#[test]
fn cleanup_never_fires_twice_per_lifecycle() {
    let log = new_log();
    let command = ProbeCommand::new("c", &log, 1).finally(log_cleanup(&log, "c"));
    let mut slot = CommandSlot::from_command(command);

    slot.start();
    slot.tick();
    // Late interrupts on a finished command are no-ops.
    slot.interrupt();
    slot.interrupt();

    assert_eq!(count(&log, &Event::Cleanup("c", false)), 1);
    assert_eq!(count(&log, &Event::Cleanup("c", true)), 0);
}

#[test]
fn reset_rearms_the_cleanup_for_the_next_lifecycle() {
    let log = new_log();
    let command = ProbeCommand::new("c", &log, 1).finally(log_cleanup(&log, "c"));
    let mut slot = CommandSlot::from_command(command);

    slot.start();
    slot.tick();
    slot.reset();
    slot.start();
    slot.tick();

    assert_eq!(count(&log, &Event::Cleanup("c", false)), 2);
}
