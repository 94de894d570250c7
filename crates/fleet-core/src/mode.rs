//! Operating mode enum shared across all simulation crates.
//!
//! The mode is fixed at creation from the resource kind and never transitions
//! during simulation: each kind has one behavior (patrolling plows keep
//! patrolling, loaders keep working their pit loop).  A richer state machine
//! with loading dwells is a possible future extension, not current behavior.

/// What a resource is doing, kinematically.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatingMode {
    /// Parked at a site; position only wanders by GPS noise (default state).
    #[default]
    Idle,
    /// Driving a route between sites.
    Moving,
    /// Operating within a work area (quarry bench, excavation pit).
    Working,
    /// Heading back to the depot.
    Returning,
}

impl OperatingMode {
    /// `true` for the held-in-place mode whose reported speed is always zero.
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, OperatingMode::Idle)
    }

    /// Human-readable label, matching the wire vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            OperatingMode::Idle      => "idle",
            OperatingMode::Moving    => "moving",
            OperatingMode::Working   => "working",
            OperatingMode::Returning => "returning",
        }
    }
}

impl std::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
