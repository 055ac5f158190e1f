//! Parallel-deadline composition: run background members for as long as
//! the deadline member takes.

use kestrel_common::resources::SubsystemSet;

use super::{Command, CommandSlot, RunState};

/// One deadline member plus concurrent members, all started together and
/// ticked within the same control cycle (cooperative - no threads, and
/// intra-cycle ordering is unspecified).
///
/// The group finishes exactly when the deadline member finishes; its own
/// `end` then force-interrupts (`end(true)`) every concurrent member still
/// running, in that same cycle. A concurrent member that finished earlier
/// keeps its normal exit. The deadline member's exit flag always matches
/// the group's own termination reason.
///
/// Members must declare disjoint requirements - overlap is a composition
/// bug and is refused at construction.
pub struct ParallelDeadlineGroup {
    deadline: CommandSlot,
    concurrent: Vec<CommandSlot>,
    requirements: SubsystemSet,
}

impl ParallelDeadlineGroup {
    pub fn new(deadline: impl Command + 'static) -> Self {
        let requirements = deadline.requirements();
        Self {
            deadline: CommandSlot::from_command(deadline),
            concurrent: Vec::new(),
            requirements,
        }
    }

    /// Add a concurrent member.
    ///
    /// # Panics
    /// If the member's requirements overlap any member already in the
    /// group - two commands must never contest a subsystem within one
    /// cycle.
    pub fn with(mut self, command: impl Command + 'static) -> Self {
        let added = command.requirements();
        assert!(
            added.is_disjoint(self.requirements),
            "parallel members must not share subsystem requirements: {:?}",
            added.intersection(self.requirements)
        );
        self.requirements |= added;
        self.concurrent.push(CommandSlot::from_command(command));
        self
    }

    /// Number of concurrent (non-deadline) members.
    pub fn concurrent_len(&self) -> usize {
        self.concurrent.len()
    }
}

impl Command for ParallelDeadlineGroup {
    fn requirements(&self) -> SubsystemSet {
        self.requirements
    }

    fn start(&mut self) {
        self.deadline.start();
        for member in &mut self.concurrent {
            member.start();
        }
    }

    fn execute(&mut self) {
        self.deadline.tick();
        for member in &mut self.concurrent {
            member.tick();
        }
    }

    fn is_finished(&self) -> bool {
        self.deadline.state() == RunState::Finished
    }

    fn end(&mut self, interrupted: bool) {
        if interrupted {
            self.deadline.interrupt();
        }
        for member in &mut self.concurrent {
            member.interrupt();
        }
    }

    fn reset(&mut self) {
        self.deadline.reset();
        for member in &mut self.concurrent {
            member.reset();
        }
    }
}
