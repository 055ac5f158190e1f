//! Simulated elevator + grabber lift.

use std::cell::RefCell;
use std::rc::Rc;

use kestrel_auton::subsystems::LiftHandle;
use kestrel_common::cal;

#[derive(Debug)]
struct LiftState {
    height_inches: f64,
    target_inches: f64,
    grabber_open: bool,
}

/// Simulated lift. The elevator moves toward its target at the calibrated
/// profile velocity; the arm is folded into the same first-order model.
#[derive(Clone)]
pub struct SimLift {
    state: Rc<RefCell<LiftState>>,
}

impl SimLift {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(LiftState {
                height_inches: cal::lift::ELEVATOR_LOW_POSITION_INCHES,
                target_inches: cal::lift::ELEVATOR_LOW_POSITION_INCHES,
                grabber_open: false,
            })),
        }
    }

    /// Advance the elevator one cycle.
    pub fn step(&self, dt: f64) {
        let mut state = self.state.borrow_mut();
        let max_step = cal::lift::ELEVATOR_MAX_VELOCITY_IN_PER_SECOND * dt;
        let delta = state.target_inches - state.height_inches;
        state.height_inches += delta.clamp(-max_step, max_step);
    }

    pub fn height_inches(&self) -> f64 {
        self.state.borrow().height_inches
    }

    pub fn grabber_open(&self) -> bool {
        self.state.borrow().grabber_open
    }

    pub fn is_homed(&self) -> bool {
        let state = self.state.borrow();
        state.target_inches == cal::lift::ELEVATOR_LOW_POSITION_INCHES
            && (state.height_inches - cal::lift::ELEVATOR_LOW_POSITION_INCHES).abs()
                <= cal::lift::ELEVATOR_MARGIN_INCHES
    }
}

impl Default for SimLift {
    fn default() -> Self {
        Self::new()
    }
}

impl LiftHandle for SimLift {
    fn home(&self) {
        self.state.borrow_mut().target_inches = cal::lift::ELEVATOR_LOW_POSITION_INCHES;
    }

    fn raise_to_score_high(&self) {
        self.state.borrow_mut().target_inches = cal::lift::ELEVATOR_HIGH_POSITION_INCHES;
    }

    fn at_scoring_position(&self) -> bool {
        let state = self.state.borrow();
        (state.height_inches - cal::lift::ELEVATOR_HIGH_POSITION_INCHES).abs()
            <= cal::lift::ELEVATOR_MARGIN_INCHES
    }

    fn open_grabber(&self) {
        self.state.borrow_mut().grabber_open = true;
    }

    fn close_grabber(&self) {
        self.state.borrow_mut().grabber_open = false;
    }
}
