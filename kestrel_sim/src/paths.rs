//! Canned path artifacts for simulation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kestrel_auton::error::TrajectoryError;
use kestrel_auton::trajectory::{PathConstraints, Trajectory, TrajectoryProvider};

/// Nominal durations of the deployed paths [s], keyed by base name (the
/// `…Red` variants share their base's duration).
const PATH_DURATIONS: &[(&str, f64)] = &[
    ("BumpFetchFirstHalf", 3.5),
    ("BumpFetchSecondHalf", 3.0),
    ("CenterToChargeStation", 2.5),
];

/// Serves the deployed path table and records every load request.
#[derive(Clone)]
pub struct SimTrajectories {
    requests: Rc<RefCell<Vec<String>>>,
    mirror_calls: Rc<Cell<u32>>,
}

impl SimTrajectories {
    pub fn new() -> Self {
        Self {
            requests: Rc::new(RefCell::new(Vec::new())),
            mirror_calls: Rc::new(Cell::new(0)),
        }
    }

    /// Every name requested so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn mirror_calls(&self) -> u32 {
        self.mirror_calls.get()
    }
}

impl Default for SimTrajectories {
    fn default() -> Self {
        Self::new()
    }
}

impl TrajectoryProvider for SimTrajectories {
    fn load_path(
        &self,
        name: &str,
        constraints: PathConstraints,
    ) -> Result<Trajectory, TrajectoryError> {
        self.requests.borrow_mut().push(name.to_owned());
        let base = name.strip_suffix("Red").unwrap_or(name);
        let duration_s = PATH_DURATIONS
            .iter()
            .find(|(known, _)| *known == base)
            .map(|(_, duration)| *duration)
            .ok_or_else(|| TrajectoryError::UnknownPath(name.to_owned()))?;
        Ok(Trajectory {
            name: name.to_owned(),
            constraints,
            duration_s,
            mirrored: false,
        })
    }

    fn mirror_for_red(&self, mut trajectory: Trajectory) -> Trajectory {
        self.mirror_calls.set(self.mirror_calls.get() + 1);
        trajectory.mirrored = true;
        trajectory
    }
}
