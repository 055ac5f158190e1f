//! Autonomous routine builders.
//!
//! A routine is a top-level command tree built once per match
//! configuration (alliance, speed profile, starting position) and handed
//! to the external scheduler's run-once-per-match-phase driver. Everything
//! alliance-specific - trajectory variants included - is computed locally
//! at build time and captured by the tree; routines are rebuilt, never
//! reused, across matches.

pub mod bump_fetch;
pub mod center_balance;
pub mod components;

pub use bump_fetch::bump_side_fetch;
pub use center_balance::center_charge_balance;
