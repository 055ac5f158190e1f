//! # Kestrel Autonomous Core
//!
//! Command composition and closed-loop control for the autonomous period.
//! Composes discrete robot actions (drive a trajectory, intake a game
//! piece, score, balance) into a deterministic timed sequence, with every
//! actuator in that sequence governed by a calibrated controller binding.
//!
//! ## Scheduling model
//!
//! Single-threaded and cooperative: an external scheduler ticks the
//! top-level command once per control cycle. "Concurrent" members of a
//! parallel group are ticked within the same cycle, never on separate
//! threads; ordering within one cycle is unspecified and nothing may
//! depend on it. No operation blocks - waits are per-cycle predicates.
//!
//! ## Modules
//!
//! - [`command`] - the command model: trait, lifecycle, groups, decorators
//! - [`control`] - PID + feedforward + motion-profile controller bindings
//! - [`subsystems`] - capability traits the commands drive hardware through
//! - [`trajectory`] - path artifacts and the provider interface
//! - [`routine`] - autonomous routine builders
//! - [`error`] - error types

pub mod command;
pub mod control;
pub mod error;
pub mod routine;
pub mod subsystems;
pub mod trajectory;
