//! Named site coordinates.
//!
//! The operating area is the Sundsvall region on the Swedish east coast:
//! one central depot, two quarries north and south of town, and the active
//! project areas haulers and excavators rotate through.

use fleet_core::GeoPoint;

/// The central depot — every route starts here and idle units park here.
pub const DEPOT: GeoPoint = GeoPoint::new(62.40, 17.28);

/// Gravel quarry north of town.
pub const QUARRY_NORTH: GeoPoint = GeoPoint::new(62.45, 17.34);

/// Rock quarry south of town.
pub const QUARRY_SOUTH: GeoPoint = GeoPoint::new(62.35, 17.21);

/// Active construction sites, rotated through by `unit_index`.
pub const PROJECT_AREAS: [GeoPoint; 3] = [
    // Harbor expansion.
    GeoPoint::new(62.422, 17.358),
    // Airfield resurfacing.
    GeoPoint::new(62.528, 17.444),
    // Paper-mill access road.
    GeoPoint::new(62.317, 17.384),
];
