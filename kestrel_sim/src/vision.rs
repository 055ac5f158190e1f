//! Simulated target-tracking camera.

use std::cell::Cell;
use std::rc::Rc;

use kestrel_auton::subsystems::VisionHandle;

/// Scripted vision: tests and the runner decide whether a target is in
/// view and at what angle.
#[derive(Clone)]
pub struct SimVision {
    angle: Rc<Cell<Option<f64>>>,
}

impl SimVision {
    pub fn new() -> Self {
        Self {
            angle: Rc::new(Cell::new(None)),
        }
    }

    pub fn set_target_angle(&self, angle_degrees: Option<f64>) {
        self.angle.set(angle_degrees);
    }
}

impl Default for SimVision {
    fn default() -> Self {
        Self::new()
    }
}

impl VisionHandle for SimVision {
    fn angle_to_target_degrees(&self) -> Option<f64> {
        self.angle.get()
    }
}
