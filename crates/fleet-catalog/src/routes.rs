//! Fixed patrol routes for plow-type resources.
//!
//! Each route is a closed loop of waypoints: the integrator wraps the cursor
//! modulo the route length, so the last leg runs back to the first point.

use fleet_core::GeoPoint;

/// Northern arterials loop.
const NORTH_LOOP: [GeoPoint; 5] = [
    GeoPoint::new(62.400, 17.280),
    GeoPoint::new(62.418, 17.295),
    GeoPoint::new(62.432, 17.321),
    GeoPoint::new(62.421, 17.345),
    GeoPoint::new(62.405, 17.310),
];

/// River crossing and southern approach.
const RIVER_LOOP: [GeoPoint; 4] = [
    GeoPoint::new(62.392, 17.294),
    GeoPoint::new(62.379, 17.318),
    GeoPoint::new(62.364, 17.296),
    GeoPoint::new(62.381, 17.270),
];

/// Coast road out to the harbor and back.
const COAST_LOOP: [GeoPoint; 6] = [
    GeoPoint::new(62.398, 17.302),
    GeoPoint::new(62.406, 17.330),
    GeoPoint::new(62.415, 17.352),
    GeoPoint::new(62.424, 17.371),
    GeoPoint::new(62.411, 17.348),
    GeoPoint::new(62.401, 17.322),
];

/// All patrol routes, selected by `unit_index % PATROL_ROUTES.len()`.
pub const PATROL_ROUTES: [&[GeoPoint]; 3] = [&NORTH_LOOP, &RIVER_LOOP, &COAST_LOOP];
