//! Command decorators: external finish predicates and cleanup-on-exit.

use kestrel_common::resources::SubsystemSet;

use super::Command;

/// Wraps a child with an external finish predicate: the command is
/// finished as soon as the predicate holds or the child finishes itself.
///
/// A predicate-triggered finish is a normal finish (`end(false)`) for the
/// wrapped command - the predicate is its finish condition, not an
/// interruption.
pub struct UntilCommand {
    inner: Box<dyn Command>,
    predicate: Box<dyn Fn() -> bool>,
}

impl Command for UntilCommand {
    fn requirements(&self) -> SubsystemSet {
        self.inner.requirements()
    }
    fn start(&mut self) {
        self.inner.start();
    }
    fn execute(&mut self) {
        self.inner.execute();
    }
    fn is_finished(&self) -> bool {
        (self.predicate)() || self.inner.is_finished()
    }
    fn end(&mut self, interrupted: bool) {
        self.inner.end(interrupted);
    }
    fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Wraps a child with a cleanup closure that runs exactly once per
/// lifecycle, after the child's own `end`, on every exit path - normal
/// finish, direct interruption, or interruption of an enclosing group.
///
/// This is how partial-failure recovery is expressed: a torn-down
/// sub-routine still leaves its hardware in a known-safe state. The fired
/// latch (cleared only by reset) makes single invocation structural.
pub struct FinallyCommand {
    inner: Box<dyn Command>,
    cleanup: Box<dyn FnMut(bool)>,
    fired: bool,
}

impl Command for FinallyCommand {
    fn requirements(&self) -> SubsystemSet {
        self.inner.requirements()
    }
    fn start(&mut self) {
        self.inner.start();
    }
    fn execute(&mut self) {
        self.inner.execute();
    }
    fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
    fn end(&mut self, interrupted: bool) {
        self.inner.end(interrupted);
        if !self.fired {
            self.fired = true;
            (self.cleanup)(interrupted);
        }
    }
    fn reset(&mut self) {
        self.fired = false;
        self.inner.reset();
    }
}

/// Builder sugar for wrapping commands.
pub trait CommandExt: Command + Sized + 'static {
    /// Finish when `predicate` first holds (or the command finishes
    /// itself).
    fn until(self, predicate: impl Fn() -> bool + 'static) -> UntilCommand {
        UntilCommand {
            inner: Box::new(self),
            predicate: Box::new(predicate),
        }
    }

    /// Run `cleanup` exactly once on any exit, after the command's own
    /// `end`. The argument is the exit's interrupted flag.
    fn finally(self, cleanup: impl FnMut(bool) + 'static) -> FinallyCommand {
        FinallyCommand {
            inner: Box::new(self),
            cleanup: Box::new(cleanup),
            fired: false,
        }
    }
}

impl<C: Command + 'static> CommandExt for C {}
