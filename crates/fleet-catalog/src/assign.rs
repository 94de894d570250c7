//! The kind-to-route assignment rule.
//!
//! `assign_route` is the single place where a resource kind turns into a
//! concrete route: which waypoints, which operating mode, which speed range.
//! The mapping is an explicit `match` over [`ResourceKind`] — route choice is
//! data on the descriptor, never inferred from id strings.

use fleet_core::{GeoPoint, OperatingMode, ResourceKind, ResourceRng};

use crate::routes::PATROL_ROUTES;
use crate::sites::{DEPOT, PROJECT_AREAS, QUARRY_NORTH, QUARRY_SOUTH};

// ── Per-kind speed ranges (km/h) ──────────────────────────────────────────────

pub const PLOW_SPEED_KMH: (f64, f64) = (30.0, 50.0);
pub const HAUL_SPEED_KMH: (f64, f64) = (40.0, 70.0);
pub const LOADER_SPEED_KMH: (f64, f64) = (5.0, 15.0);
pub const EXCAVATOR_SPEED_KMH: (f64, f64) = (2.0, 7.0);

// ── Work-loop jitter radii (degrees) ──────────────────────────────────────────

/// Loader pit loops span roughly ±90 m around the quarry center.
pub const LOADER_LOOP_JITTER_DEG: f64 = 0.0008;

/// Excavator loops are tighter, roughly ±45 m around the dig face.
pub const EXCAVATOR_LOOP_JITTER_DEG: f64 = 0.0004;

// ── RoutePlan ─────────────────────────────────────────────────────────────────

/// The seed data for one resource's kinematic state: a closed waypoint loop,
/// the fixed operating mode, and the speed range the initial speed is drawn
/// from.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePlan {
    /// Closed loop, never empty (worst case: a single point at the depot).
    pub waypoints: Vec<GeoPoint>,

    /// Operating mode, fixed for the lifetime of the resource.
    pub mode: OperatingMode,

    /// `(min, max)` km/h.  `(0, 0)` for idle resources.
    pub speed_range_kmh: (f64, f64),
}

// ── assign_route ──────────────────────────────────────────────────────────────

/// Build the route plan for one resource.
///
/// `unit_index` is the resource's ordinal among its kind; `kind_count` is how
/// many resources of that kind the fleet has (the loader rule splits the
/// loader population into a north half and a south half).  Topology is
/// deterministic given `(kind, unit_index, kind_count)`; `rng` only feeds the
/// jitter offsets of work-site loops.
pub fn assign_route(
    kind:       ResourceKind,
    unit_index: u32,
    kind_count: u32,
    rng:        &mut ResourceRng,
) -> RoutePlan {
    match kind {
        // Plows cycle the fixed patrol routes.
        ResourceKind::Plow => RoutePlan {
            waypoints:       PATROL_ROUTES[unit_index as usize % PATROL_ROUTES.len()].to_vec(),
            mode:            OperatingMode::Moving,
            speed_range_kmh: PLOW_SPEED_KMH,
        },

        // Haulers run depot → quarry → project area → depot.  Even units
        // serve the north quarry, odd units the south one.
        ResourceKind::Haul => {
            let quarry = if unit_index % 2 == 0 { QUARRY_NORTH } else { QUARRY_SOUTH };
            let area = PROJECT_AREAS[unit_index as usize % PROJECT_AREAS.len()];
            RoutePlan {
                waypoints:       vec![DEPOT, quarry, area, DEPOT],
                mode:            OperatingMode::Moving,
                speed_range_kmh: HAUL_SPEED_KMH,
            }
        }

        // Loaders work a small 3-point loop inside a quarry: the first half
        // of the loader fleet at the north quarry, the rest at the south one.
        ResourceKind::Loader => {
            let quarry = if unit_index * 2 < kind_count { QUARRY_NORTH } else { QUARRY_SOUTH };
            RoutePlan {
                waypoints:       jitter_loop(quarry, 3, LOADER_LOOP_JITTER_DEG, rng),
                mode:            OperatingMode::Working,
                speed_range_kmh: LOADER_SPEED_KMH,
            }
        }

        // Excavators shuttle a 2-point loop at their project area.
        ResourceKind::Excavator => {
            let area = PROJECT_AREAS[unit_index as usize % PROJECT_AREAS.len()];
            RoutePlan {
                waypoints:       jitter_loop(area, 2, EXCAVATOR_LOOP_JITTER_DEG, rng),
                mode:            OperatingMode::Working,
                speed_range_kmh: EXCAVATOR_SPEED_KMH,
            }
        }

        // Everything else parks at the depot.
        ResourceKind::Utility => RoutePlan {
            waypoints:       vec![DEPOT],
            mode:            OperatingMode::Idle,
            speed_range_kmh: (0.0, 0.0),
        },
    }
}

/// A closed loop of `points` randomly offset waypoints around `center`.
fn jitter_loop(
    center:     GeoPoint,
    points:     usize,
    jitter_deg: f64,
    rng:        &mut ResourceRng,
) -> Vec<GeoPoint> {
    (0..points)
        .map(|_| {
            GeoPoint::new(
                center.lat + rng.gen_range(-jitter_deg..=jitter_deg),
                center.lon + rng.gen_range(-jitter_deg..=jitter_deg),
            )
        })
        .collect()
}
