//! Field geometry primitives.

use serde::{Deserialize, Serialize};

/// Robot pose on the field: translation in meters, heading in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2d {
    pub x_meters: f64,
    pub y_meters: f64,
    pub heading_degrees: f64,
}

impl Pose2d {
    pub const fn new(x_meters: f64, y_meters: f64, heading_degrees: f64) -> Self {
        Self {
            x_meters,
            y_meters,
            heading_degrees,
        }
    }

    /// Straight-line distance to another pose [m].
    pub fn distance_to(&self, other: &Pose2d) -> f64 {
        (other.x_meters - self.x_meters).hypot(other.y_meters - self.y_meters)
    }
}

/// Normalize an angle in degrees to (-180, 180].
pub fn normalize_degrees(angle_degrees: f64) -> f64 {
    let mut angle = angle_degrees % 360.0;
    if angle > 180.0 {
        angle -= 360.0;
    } else if angle <= -180.0 {
        angle += 360.0;
    }
    angle
}
