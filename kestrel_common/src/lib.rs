//! Kestrel Common Library
//!
//! Shared constants, calibration tables, and field types for the Kestrel
//! robot workspace.
//!
//! # Module Structure
//!
//! - [`consts`] - Physical robot/field constants and control-loop timing
//! - [`cal`] - Calibration tables: tuned gains, limits, and timing values
//! - [`geom`] - Field geometry primitives
//! - [`context`] - Match context supplied once at routine-build time
//! - [`resources`] - Subsystem resource flags for command mutual exclusion
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use kestrel_common::prelude::*;
//!
//! let context = MatchContext {
//!     alliance: Alliance::Blue,
//!     speed_profile: SpeedProfile::Normal,
//!     starting_pose: Pose2d::default(),
//! };
//! assert!(!context.alliance.is_red());
//! ```

pub mod cal;
pub mod consts;
pub mod context;
pub mod geom;
pub mod prelude;
pub mod resources;
