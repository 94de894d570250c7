//! Unit tests for fleet-core primitives.

#[cfg(test)]
mod ids {
    use crate::{JobId, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = ResourceId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ResourceId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ResourceId(0) < ResourceId(1));
        assert!(JobId(100) > JobId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ResourceId::INVALID.0, u32::MAX);
        assert_eq!(JobId::INVALID.0, u32::MAX);
        assert_eq!(ResourceId::default(), ResourceId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ResourceId(7).to_string(), "ResourceId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    const DEPOT: GeoPoint = GeoPoint::new(62.40, 17.28);
    const QUARRY_NORTH: GeoPoint = GeoPoint::new(62.45, 17.34);

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(62.3908, 17.3069);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.195 km
        let a = GeoPoint::new(62.0, 17.0);
        let b = GeoPoint::new(63.0, 17.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn depot_to_quarry() {
        // 0.05° lat + 0.06° lon at 62° N works out to ~6.4 km.
        let d = DEPOT.distance_km(QUARRY_NORTH);
        assert!((d - 6.36).abs() < 0.05, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (DEPOT, QUARRY_NORTH),
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(45.0, 90.0)),
            (GeoPoint::new(-33.86, 151.21), GeoPoint::new(62.40, 17.28)),
        ];
        for (a, b) in pairs {
            assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-9);
        }
    }

    #[test]
    fn lerp_endpoints_exact() {
        assert_eq!(DEPOT.lerp(QUARRY_NORTH, 0.0), DEPOT);
        assert_eq!(DEPOT.lerp(QUARRY_NORTH, 1.0), QUARRY_NORTH);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = DEPOT.lerp(QUARRY_NORTH, 0.5);
        assert!((mid.lat - 62.425).abs() < 1e-12);
        assert!((mid.lon - 17.31).abs() < 1e-12);
    }

    #[test]
    fn bearing_cardinals() {
        // Due north from the depot.
        let north = GeoPoint::new(62.45, 17.28);
        assert!(DEPOT.bearing_deg(north).abs() < 1e-9);
        // Due south.
        let south = GeoPoint::new(62.35, 17.28);
        assert!((DEPOT.bearing_deg(south) - 180.0).abs() < 1e-9);
        // Due east at the equator.
        let origin = GeoPoint::new(0.0, 0.0);
        let east = GeoPoint::new(0.0, 1.0);
        assert!((origin.bearing_deg(east) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_in_range_and_stable_for_coincident() {
        let b = DEPOT.bearing_deg(QUARRY_NORTH);
        assert!((0.0..360.0).contains(&b));
        // Coincident points: arbitrary but stable, never a panic.
        assert_eq!(DEPOT.bearing_deg(DEPOT), DEPOT.bearing_deg(DEPOT));
    }

    #[test]
    fn within_radius() {
        assert!(QUARRY_NORTH.within_radius_km(DEPOT, 7.0));
        assert!(!QUARRY_NORTH.within_radius_km(DEPOT, 5.0));
        assert!(DEPOT.within_radius_km(DEPOT, 0.0));
    }
}

#[cfg(test)]
mod time {
    use crate::Timestamp;

    #[test]
    fn construction_and_offsets() {
        let t = Timestamp::from_unix_secs(1_700_000_000);
        assert_eq!(t.as_unix_millis(), 1_700_000_000_000);
        assert_eq!(t.offset_secs(60), t.offset_millis(60_000));
    }

    #[test]
    fn seconds_since_signed() {
        let t0 = Timestamp::from_unix_millis(10_000);
        let t1 = t0.offset_millis(2_500);
        assert!((t1.seconds_since(t0) - 2.5).abs() < 1e-9);
        // Clock jumped backward: the difference is negative, not clamped here.
        assert!((t0.seconds_since(t1) + 2.5).abs() < 1e-9);
    }

    #[test]
    fn ordering() {
        assert!(Timestamp(1) < Timestamp(2));
        assert_eq!(Timestamp::ZERO, Timestamp(0));
    }
}

#[cfg(test)]
mod mode {
    use crate::OperatingMode;

    #[test]
    fn only_idle_is_idle() {
        assert!(OperatingMode::Idle.is_idle());
        assert!(!OperatingMode::Moving.is_idle());
        assert!(!OperatingMode::Working.is_idle());
        assert!(!OperatingMode::Returning.is_idle());
    }

    #[test]
    fn display() {
        assert_eq!(OperatingMode::Moving.to_string(), "moving");
        assert_eq!(OperatingMode::default(), OperatingMode::Idle);
    }
}

#[cfg(test)]
mod dispatch {
    use crate::{DispatchStatus, JobStatus};

    #[test]
    fn wire_labels() {
        assert_eq!(JobStatus::InProgress.as_str(), "in_progress");
        assert_eq!(DispatchStatus::EnRoute.as_str(), "en_route");
        assert_eq!(DispatchStatus::OnJob.to_string(), "on_job");
    }
}

#[cfg(test)]
mod rng {
    use crate::{ResourceId, ResourceRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = ResourceRng::new(12345, ResourceId(0));
        let mut r2 = ResourceRng::new(12345, ResourceId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_resources_differ() {
        let mut r0 = ResourceRng::new(1, ResourceId(0));
        let mut r1 = ResourceRng::new(1, ResourceId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent resources should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = ResourceRng::new(0, ResourceId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
