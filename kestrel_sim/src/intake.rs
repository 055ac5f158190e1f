//! Simulated game-piece intake.

use std::cell::RefCell;
use std::rc::Rc;

use kestrel_auton::subsystems::IntakeHandle;
use kestrel_common::cal;

#[derive(Debug)]
struct IntakeState {
    deployed_target: bool,
    clamped: bool,
    rollers_running: bool,
    position_degrees: f64,
}

/// Simulated intake. The deploy arm moves toward its target at the
/// calibrated profile velocity.
#[derive(Clone)]
pub struct SimIntake {
    state: Rc<RefCell<IntakeState>>,
}

impl SimIntake {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(IntakeState {
                deployed_target: false,
                clamped: false,
                rollers_running: false,
                position_degrees: cal::intake::STARTING_POSITION_DEGREES,
            })),
        }
    }

    /// Advance the deploy arm one cycle.
    pub fn step(&self, dt: f64) {
        let mut state = self.state.borrow_mut();
        let target = if state.deployed_target {
            cal::intake::DEPLOYED_POSITION_DEGREES
        } else {
            cal::intake::STARTING_POSITION_DEGREES
        };
        let max_step = cal::intake::DEPLOY_MAX_VELOCITY_DEG_PER_SECOND * dt;
        let delta = target - state.position_degrees;
        state.position_degrees += delta.clamp(-max_step, max_step);
    }

    pub fn is_deployed_target(&self) -> bool {
        self.state.borrow().deployed_target
    }

    pub fn is_clamped(&self) -> bool {
        self.state.borrow().clamped
    }

    pub fn rollers_running(&self) -> bool {
        self.state.borrow().rollers_running
    }
}

impl Default for SimIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeHandle for SimIntake {
    fn set_deployed(&self, deployed: bool) {
        self.state.borrow_mut().deployed_target = deployed;
    }

    fn set_clamped(&self, clamped: bool) {
        self.state.borrow_mut().clamped = clamped;
    }

    fn start_intaking(&self) {
        self.state.borrow_mut().rollers_running = true;
    }

    fn stop_intaking(&self) {
        self.state.borrow_mut().rollers_running = false;
    }

    fn deploy_position_degrees(&self) -> f64 {
        self.state.borrow().position_degrees
    }
}
