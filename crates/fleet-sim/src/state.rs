//! Per-resource kinematic state.

use fleet_catalog::RoutePlan;
use fleet_core::{GeoPoint, OperatingMode, ResourceId, ResourceRng, Timestamp};

/// The kinematic record for a single resource.
///
/// A resource follows a fixed closed waypoint loop: `target` is always
/// `waypoints[waypoint_index]`, one step ahead of `position`, and `position`
/// converges toward it every tick until arrival, at which point the cursor
/// advances (wrapping modulo the loop length) and a new target and heading
/// are set.
///
/// Mutated in place by the integrator only; never destroyed for the lifetime
/// of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicState {
    /// Identity in the external fleet catalog.  Immutable.
    pub resource: ResourceId,

    /// Where the resource is right now.
    pub position: GeoPoint,

    /// The waypoint currently being driven toward.  Invariant:
    /// `target == waypoints[waypoint_index]`.
    pub target: GeoPoint,

    /// Current speed in km/h.  `0` while idle; clamped to the moving bounds
    /// by the integrator's per-tick perturbation otherwise.
    pub speed_kmh: f64,

    /// Compass heading in `[0, 360)`, recomputed whenever the target changes.
    pub heading_deg: f64,

    /// The closed route loop.  Never empty — the integrator self-heals a
    /// corrupt loop to a single point at the current position.
    pub waypoints: Vec<GeoPoint>,

    /// Cursor into `waypoints`, wraps modulo length.
    pub waypoint_index: usize,

    /// Operating mode, fixed at creation per resource kind.
    pub mode: OperatingMode,

    /// When this record was last integrated; elapsed time for the next step
    /// is measured from here.
    pub last_update: Timestamp,
}

impl KinematicState {
    /// Seed a state from a catalog route plan.
    ///
    /// The resource starts at the first waypoint with the cursor on the next
    /// one, so the target is one step ahead from the very first tick.  The
    /// initial speed is drawn uniformly from the plan's range.
    pub fn from_plan(
        resource: ResourceId,
        plan:     RoutePlan,
        now:      Timestamp,
        rng:      &mut ResourceRng,
    ) -> Self {
        let waypoints = if plan.waypoints.is_empty() {
            // The catalog guarantees non-empty; keep the invariant anyway.
            vec![fleet_catalog::DEPOT]
        } else {
            plan.waypoints
        };

        let position = waypoints[0];
        let waypoint_index = 1 % waypoints.len();
        let target = waypoints[waypoint_index];

        let (lo, hi) = plan.speed_range_kmh;
        let speed_kmh = if plan.mode.is_idle() { 0.0 } else { rng.gen_range(lo..=hi) };

        Self {
            resource,
            position,
            target,
            speed_kmh,
            heading_deg: position.bearing_deg(target),
            waypoints,
            waypoint_index,
            mode: plan.mode,
            last_update: now,
        }
    }

    /// Great-circle distance from the current position to the target, km.
    #[inline]
    pub fn remaining_km(&self) -> f64 {
        self.position.distance_km(self.target)
    }

    /// Advance the cursor one step (wrapping), retarget, and recompute the
    /// heading from the current position.
    pub fn advance_waypoint(&mut self) {
        self.waypoint_index = (self.waypoint_index + 1) % self.waypoints.len();
        self.target = self.waypoints[self.waypoint_index];
        self.heading_deg = self.position.bearing_deg(self.target);
    }

    /// Restore the loop invariants after external corruption.
    ///
    /// An empty loop becomes a single point at the current position; an
    /// out-of-range cursor wraps.  Self-healing, never an error.
    pub fn repair_waypoints(&mut self) {
        if self.waypoints.is_empty() {
            self.waypoints = vec![self.position];
            self.waypoint_index = 0;
            self.target = self.position;
        } else if self.waypoint_index >= self.waypoints.len() {
            self.waypoint_index %= self.waypoints.len();
            self.target = self.waypoints[self.waypoint_index];
        }
    }
}
