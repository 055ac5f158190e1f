//! Prelude module for common re-exports.
//!
//! ```rust
//! use kestrel_common::prelude::*;
//! ```

// ─── Match context ──────────────────────────────────────────────────
pub use crate::context::{Alliance, MatchContext, SpeedProfile};

// ─── Geometry ───────────────────────────────────────────────────────
pub use crate::geom::{Pose2d, normalize_degrees};

// ─── Resources ──────────────────────────────────────────────────────
pub use crate::resources::SubsystemSet;

// ─── Timing ─────────────────────────────────────────────────────────
pub use crate::consts::{CYCLE_TIME_S, CYCLES_PER_SECOND};
