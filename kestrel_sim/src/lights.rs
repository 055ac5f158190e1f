//! Simulated driver-signal lights.

use std::cell::RefCell;
use std::rc::Rc;

use kestrel_auton::subsystems::{LightsHandle, LightsMode};

/// Records every commanded light mode.
#[derive(Clone)]
pub struct SimLights {
    history: Rc<RefCell<Vec<LightsMode>>>,
}

impl SimLights {
    pub fn new() -> Self {
        Self {
            history: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current(&self) -> Option<LightsMode> {
        self.history.borrow().last().copied()
    }

    pub fn history(&self) -> Vec<LightsMode> {
        self.history.borrow().clone()
    }
}

impl Default for SimLights {
    fn default() -> Self {
        Self::new()
    }
}

impl LightsHandle for SimLights {
    fn set_mode(&self, mode: LightsMode) {
        self.history.borrow_mut().push(mode);
    }
}
