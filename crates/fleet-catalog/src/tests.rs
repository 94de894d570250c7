//! Unit tests for the route assignment rule.

use fleet_core::{GeoPoint, OperatingMode, ResourceId, ResourceKind, ResourceRng};

use crate::assign::{RoutePlan, assign_route};
use crate::routes::PATROL_ROUTES;
use crate::sites::{DEPOT, PROJECT_AREAS, QUARRY_NORTH, QUARRY_SOUTH};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rng(resource: u32) -> ResourceRng {
    ResourceRng::new(42, ResourceId(resource))
}

fn plan(kind: ResourceKind, unit_index: u32, kind_count: u32) -> RoutePlan {
    assign_route(kind, unit_index, kind_count, &mut rng(unit_index))
}

fn close_to(a: GeoPoint, b: GeoPoint, km: f64) -> bool {
    a.distance_km(b) <= km
}

// ── Per-kind topology ─────────────────────────────────────────────────────────

#[cfg(test)]
mod per_kind {
    use super::*;

    #[test]
    fn plow_cycles_patrol_routes() {
        for i in 0..6u32 {
            let p = plan(ResourceKind::Plow, i, 6);
            let expected = PATROL_ROUTES[i as usize % PATROL_ROUTES.len()];
            assert_eq!(p.waypoints.as_slice(), expected);
            assert_eq!(p.mode, OperatingMode::Moving);
            assert_eq!(p.speed_range_kmh, (30.0, 50.0));
        }
    }

    #[test]
    fn haul_quarry_alternates_by_parity() {
        let even = plan(ResourceKind::Haul, 0, 4);
        let odd = plan(ResourceKind::Haul, 1, 4);
        assert_eq!(even.waypoints.len(), 4);
        assert_eq!(even.waypoints[0], DEPOT);
        assert_eq!(even.waypoints[1], QUARRY_NORTH);
        assert_eq!(even.waypoints[3], DEPOT);
        assert_eq!(odd.waypoints[1], QUARRY_SOUTH);
        assert_eq!(even.mode, OperatingMode::Moving);
    }

    #[test]
    fn haul_project_area_rotates() {
        for i in 0..6u32 {
            let p = plan(ResourceKind::Haul, i, 6);
            assert_eq!(p.waypoints[2], PROJECT_AREAS[i as usize % PROJECT_AREAS.len()]);
        }
    }

    #[test]
    fn loader_splits_fleet_between_quarries() {
        // 4 loaders: units 0–1 north, units 2–3 south.
        for i in 0..2u32 {
            let p = plan(ResourceKind::Loader, i, 4);
            assert_eq!(p.waypoints.len(), 3);
            for wp in &p.waypoints {
                assert!(close_to(*wp, QUARRY_NORTH, 0.2), "unit {i} not at north quarry");
            }
            assert_eq!(p.mode, OperatingMode::Working);
        }
        for i in 2..4u32 {
            let p = plan(ResourceKind::Loader, i, 4);
            for wp in &p.waypoints {
                assert!(close_to(*wp, QUARRY_SOUTH, 0.2), "unit {i} not at south quarry");
            }
        }
    }

    #[test]
    fn excavator_two_point_loop_at_project_area() {
        for i in 0..3u32 {
            let p = plan(ResourceKind::Excavator, i, 3);
            assert_eq!(p.waypoints.len(), 2);
            let area = PROJECT_AREAS[i as usize % PROJECT_AREAS.len()];
            for wp in &p.waypoints {
                assert!(close_to(*wp, area, 0.1));
            }
            assert_eq!(p.speed_range_kmh, (2.0, 7.0));
        }
    }

    #[test]
    fn utility_parks_idle_at_depot() {
        let p = plan(ResourceKind::Utility, 0, 1);
        assert_eq!(p.waypoints, vec![DEPOT]);
        assert_eq!(p.mode, OperatingMode::Idle);
        assert_eq!(p.speed_range_kmh, (0.0, 0.0));
    }

    #[test]
    fn waypoints_never_empty() {
        let kinds = [
            ResourceKind::Plow,
            ResourceKind::Haul,
            ResourceKind::Loader,
            ResourceKind::Excavator,
            ResourceKind::Utility,
        ];
        for kind in kinds {
            for i in 0..8u32 {
                assert!(!plan(kind, i, 8).waypoints.is_empty());
            }
        }
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    #[test]
    fn same_seed_reproduces_full_plan() {
        // Jitter included: identical RNG state → identical waypoints.
        let a = assign_route(ResourceKind::Loader, 1, 4, &mut rng(1));
        let b = assign_route(ResourceKind::Loader, 1, 4, &mut rng(1));
        assert_eq!(a, b);
    }

    #[test]
    fn topology_is_rng_independent_for_fixed_routes() {
        // Plow and haul routes carry no jitter at all — any RNG state yields
        // the same waypoints.
        let a = assign_route(ResourceKind::Haul, 2, 4, &mut rng(0));
        let b = assign_route(ResourceKind::Haul, 2, 4, &mut rng(99));
        assert_eq!(a.waypoints, b.waypoints);
    }
}
