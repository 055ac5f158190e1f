//! Command model: composable robot actions with a deterministic lifecycle.
//!
//! A command runs `Idle → Running → {Finished, Interrupted}`; both end
//! states are terminal until an explicit reset. The owning composite (or
//! the external scheduler) drives the lifecycle through [`CommandSlot`],
//! which is what makes the hook guarantees hold: `start` fires exactly once
//! per run, `end` fires exactly once per exit, and a terminal command only
//! returns to `Idle` through [`CommandSlot::reset`].
//!
//! Composition:
//! - [`SequentialGroup`] - ordered chain, one child active at a time
//! - [`ParallelDeadlineGroup`] - run background members for as long as the
//!   deadline member takes, then force-interrupt them
//! - [`FinallyCommand`] / [`UntilCommand`] - cleanup-on-exit and external
//!   finish predicates, via [`CommandExt`]
//! - [`InstantCommand`] / [`RunCommand`] / [`WaitCommand`] /
//!   [`WaitUntilCommand`] - closure and timing leaves

use kestrel_common::resources::SubsystemSet;

pub mod deadline;
pub mod decorator;
pub mod primitives;
pub mod sequential;

pub use deadline::ParallelDeadlineGroup;
pub use decorator::{CommandExt, FinallyCommand, UntilCommand};
pub use primitives::{InstantCommand, RunCommand, WaitCommand, WaitUntilCommand};
pub use sequential::SequentialGroup;

/// One schedulable robot action.
///
/// Hooks are driven by the owning composite: `start` exactly once on
/// `Idle → Running`, `execute` once per control cycle while running,
/// `end` exactly once on any exit from `Running`. `end(true)` means the
/// command was torn down before finishing and must leave its mechanism in
/// a safe state. Interruption is cooperative - a command cannot refuse it.
pub trait Command {
    /// Exclusive-access resources this command needs. Static for the
    /// command's lifetime; enforced by interruption, never by blocking.
    fn requirements(&self) -> SubsystemSet {
        SubsystemSet::empty()
    }

    /// Arm the action: latch setpoints, reset loop state.
    fn start(&mut self);

    /// One control cycle of work. Must not block.
    fn execute(&mut self);

    /// Finish predicate, evaluated after each `execute`.
    fn is_finished(&self) -> bool;

    /// Exit hook. `interrupted` is true when an owner tore the command
    /// down before [`Self::is_finished`] held.
    fn end(&mut self, interrupted: bool);

    /// Return internal state to as-constructed so the command can run
    /// again. Only ever called through [`CommandSlot::reset`], never as a
    /// side effect of scheduling.
    fn reset(&mut self) {}
}

impl Command for Box<dyn Command> {
    fn requirements(&self) -> SubsystemSet {
        (**self).requirements()
    }
    fn start(&mut self) {
        (**self).start();
    }
    fn execute(&mut self) {
        (**self).execute();
    }
    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
    fn end(&mut self, interrupted: bool) {
        (**self).end(interrupted);
    }
    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Lifecycle state of a slotted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Finished,
    Interrupted,
}

impl RunState {
    /// Finished or Interrupted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, RunState::Finished | RunState::Interrupted)
    }
}

/// Owns a command together with its lifecycle state.
///
/// All transitions go through this type; invalid transitions (starting a
/// running command, interrupting an idle one) are no-ops rather than
/// errors, so owners never double-deliver a hook.
pub struct CommandSlot {
    command: Box<dyn Command>,
    state: RunState,
}

impl CommandSlot {
    pub fn new(command: Box<dyn Command>) -> Self {
        Self {
            command,
            state: RunState::Idle,
        }
    }

    pub fn from_command(command: impl Command + 'static) -> Self {
        Self::new(Box::new(command))
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn requirements(&self) -> SubsystemSet {
        self.command.requirements()
    }

    /// `Idle → Running`, firing the command's `start`. Ignored in any
    /// other state.
    pub fn start(&mut self) {
        if self.state == RunState::Idle {
            self.command.start();
            self.state = RunState::Running;
        }
    }

    /// Run one control cycle: execute, then latch `Finished` (firing
    /// `end(false)`) once the finish predicate holds.
    pub fn tick(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.command.execute();
        if self.command.is_finished() {
            self.command.end(false);
            self.state = RunState::Finished;
        }
    }

    /// Tear down a running command, firing `end(true)`. No-op in any
    /// other state - a command that already finished keeps its normal
    /// exit.
    pub fn interrupt(&mut self) {
        if self.state == RunState::Running {
            self.command.end(true);
            self.state = RunState::Interrupted;
        }
    }

    /// Explicit recycle: a terminal (or never-started) command returns to
    /// `Idle`. Ignored while running - a live command must be interrupted
    /// first so its `end` is not skipped.
    pub fn reset(&mut self) {
        if self.state != RunState::Running {
            self.command.reset();
            self.state = RunState::Idle;
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
