//! Path artifacts and the trajectory-provider interface.
//!
//! The core never runs trajectory math itself - it loads named path
//! descriptors, transforms them for the alliance, and hands them to
//! [`DriveHandle::follow_trajectory`](crate::subsystems::DriveHandle::follow_trajectory).

use serde::{Deserialize, Serialize};
use tracing::info;

use kestrel_common::context::Alliance;

use crate::error::TrajectoryError;

/// Speed/acceleration constraints a path is generated under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathConstraints {
    pub max_velocity_mps: f64,
    pub max_acceleration_mps2: f64,
}

impl PathConstraints {
    pub const fn new(max_velocity_mps: f64, max_acceleration_mps2: f64) -> Self {
        Self {
            max_velocity_mps,
            max_acceleration_mps2,
        }
    }
}

/// Opaque descriptor of a loaded path artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub name: String,
    pub constraints: PathConstraints,
    /// Nominal duration under `constraints` [s].
    pub duration_s: f64,
    /// Whether the field-mirroring transform has been applied.
    pub mirrored: bool,
}

/// Loads named path artifacts and mirrors them across the field
/// centerline for the red alliance.
pub trait TrajectoryProvider {
    fn load_path(
        &self,
        name: &str,
        constraints: PathConstraints,
    ) -> Result<Trajectory, TrajectoryError>;

    /// Reflect the path for the red side of the field.
    fn mirror_for_red(&self, trajectory: Trajectory) -> Trajectory;
}

/// Load the alliance-correct variant of `base_name`.
///
/// Red loads the `{base_name}Red` artifact and applies the mirroring
/// transform; blue uses the base artifact untransformed.
pub fn load_alliance_path(
    provider: &dyn TrajectoryProvider,
    base_name: &str,
    constraints: PathConstraints,
    alliance: Alliance,
) -> Result<Trajectory, TrajectoryError> {
    let trajectory = if alliance.is_red() {
        let name = format!("{base_name}Red");
        let loaded = provider.load_path(&name, constraints)?;
        provider.mirror_for_red(loaded)
    } else {
        provider.load_path(base_name, constraints)?
    };
    info!(
        "Loaded path '{}' ({:.1}s, mirrored: {})",
        trajectory.name, trajectory.duration_s, trajectory.mirrored
    );
    Ok(trajectory)
}
