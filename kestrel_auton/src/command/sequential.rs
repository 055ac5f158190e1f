//! Sequential composition: ordered children, one active at a time.

use kestrel_common::resources::SubsystemSet;

use super::{Command, CommandSlot, RunState};

/// Ordered chain of commands.
///
/// When the active child finishes, its `end(false)` fires, the index
/// advances, and the next child's `start` fires within the same cycle; the
/// new child's first `execute` happens the following cycle. Interrupting
/// the chain delivers `end(true)` to the active child only - children that
/// never started get no callback.
pub struct SequentialGroup {
    children: Vec<CommandSlot>,
    index: usize,
    requirements: SubsystemSet,
}

impl SequentialGroup {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            index: 0,
            requirements: SubsystemSet::empty(),
        }
    }

    /// Append a child; its requirements join the group's.
    pub fn then(mut self, command: impl Command + 'static) -> Self {
        self.requirements |= command.requirements();
        self.children.push(CommandSlot::from_command(command));
        self
    }

    /// Declare requirements beyond the union of the children's, e.g. a
    /// subsystem a later-bound child will touch.
    pub fn require(mut self, requirements: SubsystemSet) -> Self {
        self.requirements |= requirements;
        self
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for SequentialGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for SequentialGroup {
    fn requirements(&self) -> SubsystemSet {
        self.requirements
    }

    fn start(&mut self) {
        self.index = 0;
        if let Some(first) = self.children.first_mut() {
            first.start();
        }
    }

    fn execute(&mut self) {
        let Some(child) = self.children.get_mut(self.index) else {
            return;
        };
        child.tick();
        if child.state() == RunState::Finished {
            self.index += 1;
            if let Some(next) = self.children.get_mut(self.index) {
                next.start();
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.index >= self.children.len()
    }

    fn end(&mut self, interrupted: bool) {
        if interrupted && let Some(child) = self.children.get_mut(self.index) {
            child.interrupt();
        }
    }

    fn reset(&mut self) {
        self.index = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}
