//! The kinematic integrator: advances every resource's state by the elapsed
//! wall-clock delta and emits one position sample per resource.

use tracing::trace;

use fleet_core::{ResourceDescriptor, ResourceId, ResourceRng, Timestamp};

use crate::{FleetStore, KinematicState, ResourceRngs, SimResult};

// ── Tunables ──────────────────────────────────────────────────────────────────

/// Hard speed bounds while moving, km/h.  The per-tick perturbation never
/// leaves this band, regardless of `dt`.
pub const MIN_MOVING_SPEED_KMH: f64 = 5.0;
pub const MAX_MOVING_SPEED_KMH: f64 = 80.0;

/// Maximum per-tick speed change, km/h.
pub const SPEED_PERTURB_KMH: f64 = 1.0;

/// Positional noise applied to idle resources, degrees (≈ 1 m).
pub const IDLE_JITTER_DEG: f64 = 1.0e-5;

/// Reported GPS accuracy band, metres.
pub const MIN_ACCURACY_M: f64 = 3.0;
pub const MAX_ACCURACY_M: f64 = 8.0;

// ── Wire types ────────────────────────────────────────────────────────────────

/// One emitted position fix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSample {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: Timestamp,
    /// km/h; always `0` for idle resources.
    #[cfg_attr(feature = "serde", serde(rename = "speed"))]
    pub speed_kmh: f64,
    /// Compass degrees in `[0, 360)`.
    #[cfg_attr(feature = "serde", serde(rename = "heading"))]
    pub heading_deg: f64,
    /// Simulated GPS accuracy, metres.
    #[cfg_attr(feature = "serde", serde(rename = "accuracy"))]
    pub accuracy_m: f64,
}

/// A sample tagged with its resource — the per-tick broadcast element.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedPosition {
    pub resource: ResourceId,
    pub position: PositionSample,
}

/// The full output of one tick, ascending by resource id.
pub type PositionBatch = Vec<TrackedPosition>;

// ── KinematicEngine ───────────────────────────────────────────────────────────

/// Owns the [`FleetStore`] and the per-resource RNGs, and advances them one
/// tick at a time.
///
/// Only `tick` mutates kinematic state; each resource's update is computed
/// and applied as a whole, so a reader holding the engine between ticks never
/// observes a half-updated record.
pub struct KinematicEngine {
    /// All per-resource kinematic state.
    pub store: FleetStore,

    /// Per-resource RNGs, index-aligned with `store.states`.
    pub rngs: ResourceRngs,
}

impl KinematicEngine {
    /// An engine with an empty store; call [`initialize`][Self::initialize]
    /// before ticking.
    pub fn new() -> Self {
        Self {
            store: FleetStore::new(),
            rngs: ResourceRngs::empty(),
        }
    }

    /// Seed the store and RNGs from the fleet catalog.  See
    /// [`FleetStore::initialize`] for the error contract.
    pub fn initialize(
        &mut self,
        fleet: &[ResourceDescriptor],
        seed:  u64,
        now:   Timestamp,
    ) -> SimResult<()> {
        self.rngs = self.store.initialize(fleet, seed, now)?;
        Ok(())
    }

    /// Drop all tracked state so `initialize` may be called again.
    pub fn reset(&mut self) {
        self.store.reset();
        self.rngs = ResourceRngs::empty();
    }

    /// Advance every resource to `now` and emit one sample each.
    ///
    /// With the `parallel` feature the per-resource steps run on Rayon's
    /// thread pool; resources are independent, so the result is identical to
    /// the sequential pass.
    pub fn tick(&mut self, now: Timestamp) -> PositionBatch {
        trace!(%now, resources = self.store.states.len(), "integration tick");

        // Split borrow: states and RNGs are parallel arrays.
        let states = &mut self.store.states;
        let rngs = &mut self.rngs.inner;
        debug_assert_eq!(states.len(), rngs.len());

        #[cfg(not(feature = "parallel"))]
        {
            states
                .iter_mut()
                .zip(rngs.iter_mut())
                .map(|(state, rng)| TrackedPosition {
                    resource: state.resource,
                    position: step_resource(state, rng, now),
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            states
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .map(|(state, rng)| TrackedPosition {
                    resource: state.resource,
                    position: step_resource(state, rng, now),
                })
                .collect()
        }
    }
}

impl Default for KinematicEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ── Per-resource step ─────────────────────────────────────────────────────────

/// Advance one resource to `now` and emit its sample.
///
/// `dt ≤ 0` (clock skew) skips movement entirely but still emits.  Idle
/// resources only wander by GPS noise.  Everything else steps toward the
/// current target; an arrival snaps to it and advances the cursor **at most
/// one waypoint per tick** — under a very large `dt` a fast resource could
/// conceptually lap several waypoints, but the single advance is the intended
/// approximation at the reference 2 s interval.
fn step_resource(
    state: &mut KinematicState,
    rng:   &mut ResourceRng,
    now:   Timestamp,
) -> PositionSample {
    state.repair_waypoints();

    let dt_secs = now.seconds_since(state.last_update).max(0.0);
    if dt_secs > 0.0 {
        if state.mode.is_idle() {
            jitter_in_place(state, rng);
        } else {
            advance_along_route(state, rng, dt_secs);
        }
    }
    state.last_update = now;

    PositionSample {
        latitude:    state.position.lat,
        longitude:   state.position.lon,
        timestamp:   now,
        speed_kmh:   if state.mode.is_idle() { 0.0 } else { state.speed_kmh },
        heading_deg: state.heading_deg,
        accuracy_m:  rng.gen_range(MIN_ACCURACY_M..=MAX_ACCURACY_M),
    }
}

/// Metre-scale positional noise for a held-in-place resource.
fn jitter_in_place(state: &mut KinematicState, rng: &mut ResourceRng) {
    state.position.lat += rng.gen_range(-IDLE_JITTER_DEG..=IDLE_JITTER_DEG);
    state.position.lon += rng.gen_range(-IDLE_JITTER_DEG..=IDLE_JITTER_DEG);
}

/// Move toward the current target by `speed · dt`, arriving or interpolating.
fn advance_along_route(state: &mut KinematicState, rng: &mut ResourceRng, dt_secs: f64) {
    let remaining_km = state.remaining_km();
    let step_km = state.speed_kmh / 3_600.0 * dt_secs;

    if step_km >= remaining_km {
        // Arrival and re-departure happen within the same tick; no dwell.
        state.position = state.target;
        state.advance_waypoint();
    } else {
        let fraction = step_km / remaining_km;
        state.position = state.position.lerp(state.target, fraction);

        let delta = rng.gen_range(-SPEED_PERTURB_KMH..=SPEED_PERTURB_KMH);
        state.speed_kmh =
            (state.speed_kmh + delta).clamp(MIN_MOVING_SPEED_KMH, MAX_MOVING_SPEED_KMH);
    }
}
