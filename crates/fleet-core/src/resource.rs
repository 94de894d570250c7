//! Fleet resource vocabulary: the kind enum and the descriptor the external
//! fleet catalog hands to the simulation at startup.

use std::fmt;

use crate::ResourceId;

/// The kind of a fleet resource.  Drives route assignment, operating mode,
/// and speed range at initialization.
///
/// The mapping from kind to route topology lives in `fleet-catalog`; the kind
/// is explicit data on the descriptor, never derived from parsing an id
/// string.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    /// Snow plow / road-maintenance truck on a fixed patrol route.
    Plow,
    /// Haul truck cycling depot → quarry → project area → depot.
    Haul,
    /// Wheel loader working a tight loop inside a quarry.
    Loader,
    /// Excavator working a project area.
    Excavator,
    /// Anything else (service vans, trailers) — parked at the depot.
    Utility,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Plow      => "plow",
            ResourceKind::Haul      => "haul",
            ResourceKind::Loader    => "loader",
            ResourceKind::Excavator => "excavator",
            ResourceKind::Utility   => "utility",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the external fleet catalog, read once at initialization.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceDescriptor {
    /// Identity in the external fleet catalog.  Immutable.
    pub id: ResourceId,

    /// Kind, as explicit data.
    pub kind: ResourceKind,

    /// Ordinal of this unit among resources of the same kind (0-based).
    /// Route assignment keys off this index: patrol route selection, quarry
    /// parity, project-area rotation.
    pub unit_index: u32,
}

impl ResourceDescriptor {
    pub const fn new(id: ResourceId, kind: ResourceKind, unit_index: u32) -> Self {
        Self { id, kind, unit_index }
    }
}
