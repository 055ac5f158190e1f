//! Whole-robot simulation bundle.

use std::rc::Rc;

use kestrel_auton::subsystems::SubsystemHandles;

use crate::drive::SimDrive;
use crate::intake::SimIntake;
use crate::lift::SimLift;
use crate::lights::SimLights;
use crate::vision::SimVision;

/// All simulated subsystems plus the per-cycle physics step.
pub struct SimRobot {
    pub drive: SimDrive,
    pub intake: SimIntake,
    pub lift: SimLift,
    pub vision: SimVision,
    pub lights: SimLights,
}

impl SimRobot {
    pub fn new() -> Self {
        Self {
            drive: SimDrive::new(),
            intake: SimIntake::new(),
            lift: SimLift::new(),
            vision: SimVision::new(),
            lights: SimLights::new(),
        }
    }

    /// Capability handles for the routine builders. Clones share this
    /// robot's state.
    pub fn handles(&self) -> SubsystemHandles {
        SubsystemHandles {
            drive: Rc::new(self.drive.clone()),
            intake: Rc::new(self.intake.clone()),
            lift: Rc::new(self.lift.clone()),
            vision: Rc::new(self.vision.clone()),
            lights: Rc::new(self.lights.clone()),
        }
    }

    /// Advance every mechanism one control cycle.
    pub fn step(&self, dt: f64) {
        self.drive.step(dt);
        self.intake.step(dt);
        self.lift.step(dt);
    }
}

impl Default for SimRobot {
    fn default() -> Self {
        Self::new()
    }
}
