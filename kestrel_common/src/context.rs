//! Match context supplied once at routine-build time.

use serde::{Deserialize, Serialize};

use crate::geom::Pose2d;

/// Alliance color for the current match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alliance {
    Blue,
    Red,
}

impl Alliance {
    /// Path artifacts default to the blue side; red loads the mirrored
    /// variants.
    #[inline]
    pub const fn is_red(self) -> bool {
        matches!(self, Alliance::Red)
    }
}

/// Autonomous speed profile selected by the drive team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedProfile {
    #[default]
    Normal,
    /// Skips settle dwells where the mechanism tolerates it.
    Fast,
}

/// Everything alliance- and station-specific the routine builders need.
/// Built once at match setup; routines capture what they use from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchContext {
    pub alliance: Alliance,
    pub speed_profile: SpeedProfile,
    pub starting_pose: Pose2d,
}
