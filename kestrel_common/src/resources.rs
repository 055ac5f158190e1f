//! Subsystem resource flags for command mutual exclusion.

use bitflags::bitflags;

bitflags! {
    /// The set of exclusive-access subsystem resources a command requires.
    ///
    /// Two commands whose sets intersect must never run concurrently: the
    /// external scheduler interrupts the older claim, and parallel groups
    /// refuse overlapping members at construction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SubsystemSet: u8 {
        /// Swerve drive base.
        const DRIVE  = 0x01;
        /// Game-piece intake.
        const INTAKE = 0x02;
        /// Elevator + arm lift.
        const LIFT   = 0x04;
        /// Target-tracking camera.
        const VISION = 0x08;
        /// Driver signal lights.
        const LIGHTS = 0x10;
    }
}

impl SubsystemSet {
    /// True when the two requirement sets share no subsystem.
    #[inline]
    pub fn is_disjoint(&self, other: Self) -> bool {
        self.intersection(other).is_empty()
    }
}

impl Default for SubsystemSet {
    fn default() -> Self {
        Self::empty()
    }
}
