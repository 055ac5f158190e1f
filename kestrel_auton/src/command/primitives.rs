//! Leaf commands: one-shot closures, per-cycle closures, and waits.

use kestrel_common::consts;
use kestrel_common::resources::SubsystemSet;

use super::Command;

/// Runs its closure once at start and reports finished on the first poll.
pub struct InstantCommand {
    action: Box<dyn FnMut()>,
    requirements: SubsystemSet,
}

impl InstantCommand {
    pub fn new(requirements: SubsystemSet, action: impl FnMut() + 'static) -> Self {
        Self {
            action: Box::new(action),
            requirements,
        }
    }
}

impl Command for InstantCommand {
    fn requirements(&self) -> SubsystemSet {
        self.requirements
    }
    fn start(&mut self) {
        (self.action)();
    }
    fn execute(&mut self) {}
    fn is_finished(&self) -> bool {
        true
    }
    fn end(&mut self, _interrupted: bool) {}
}

/// Runs its closure every cycle and never finishes on its own. Pair with
/// [`CommandExt::until`](super::CommandExt::until) or run it under a
/// deadline group.
pub struct RunCommand {
    body: Box<dyn FnMut()>,
    requirements: SubsystemSet,
}

impl RunCommand {
    pub fn new(requirements: SubsystemSet, body: impl FnMut() + 'static) -> Self {
        Self {
            body: Box::new(body),
            requirements,
        }
    }
}

impl Command for RunCommand {
    fn requirements(&self) -> SubsystemSet {
        self.requirements
    }
    fn start(&mut self) {}
    fn execute(&mut self) {
        (self.body)();
    }
    fn is_finished(&self) -> bool {
        false
    }
    fn end(&mut self, _interrupted: bool) {}
}

/// Finishes after a fixed duration, counted in whole control cycles.
/// A per-cycle predicate, not a sleep.
pub struct WaitCommand {
    total_cycles: u64,
    remaining: u64,
}

impl WaitCommand {
    /// `seconds` rounds up to whole control cycles.
    pub fn new(seconds: f64) -> Self {
        let total_cycles = (seconds.max(0.0) / consts::CYCLE_TIME_S).ceil() as u64;
        Self {
            total_cycles,
            remaining: total_cycles,
        }
    }
}

impl Command for WaitCommand {
    fn start(&mut self) {
        self.remaining = self.total_cycles;
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

/// Finishes as soon as its predicate holds; does nothing else.
pub struct WaitUntilCommand {
    predicate: Box<dyn Fn() -> bool>,
}

impl WaitUntilCommand {
    pub fn new(predicate: impl Fn() -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl Command for WaitUntilCommand {
    fn start(&mut self) {}
    fn execute(&mut self) {}
    fn is_finished(&self) -> bool {
        (self.predicate)()
    }
    fn end(&mut self, _interrupted: bool) {}
}

// ─── Tests ──────────────────────────────────────────────────────────
