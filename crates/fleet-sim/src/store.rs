//! The `FleetStore` — owner of all mutable simulation state — and the
//! per-resource RNG array that travels alongside it.
//!
//! # Why two structs?
//!
//! The parallel tick needs `&mut` access to each resource's state *and* its
//! RNG simultaneously.  Keeping the RNGs in a separate `ResourceRngs` gives
//! the integrator two parallel `Vec`s to zip — each worker gets a disjoint
//! `(&mut KinematicState, &mut ResourceRng)` pair with no aliasing question.
//!
//! The store is an explicit value owned by the composition root and passed by
//! handle to the scheduler and request layer — never a module-level
//! singleton.  Tests inject a fresh store each.

use rustc_hash::FxHashMap;
use tracing::info;

use fleet_catalog::assign_route;
use fleet_core::{ResourceDescriptor, ResourceId, ResourceKind, ResourceRng, Timestamp};

use crate::{KinematicState, SimError, SimResult};

// ── ResourceRngs ──────────────────────────────────────────────────────────────

/// Per-resource deterministic RNG state, index-aligned with
/// [`FleetStore::states`].
pub struct ResourceRngs {
    pub inner: Vec<ResourceRng>,
}

impl ResourceRngs {
    pub fn empty() -> Self {
        Self { inner: Vec::new() }
    }

    /// Mutable reference to one resource's RNG, by dense index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut ResourceRng {
        &mut self.inner[index]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── FleetStore ────────────────────────────────────────────────────────────────

/// Holds one [`KinematicState`] per tracked resource, sorted by
/// [`ResourceId`] so every batch and snapshot is deterministically ordered.
///
/// The `states` vector is dense; the private map resolves an id to its index.
pub struct FleetStore {
    /// Per-resource kinematic state, ascending by resource id.
    pub states: Vec<KinematicState>,

    /// `ResourceId → index into states`.
    index: FxHashMap<ResourceId, usize>,
}

impl FleetStore {
    /// An empty, uninitialized store.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Seed one kinematic state (and one RNG) per fleet descriptor.
    ///
    /// Descriptors are sorted by resource id first, so batch order is
    /// independent of catalog order.  Route topology comes from
    /// [`fleet_catalog::assign_route`]; jitter offsets and initial speeds
    /// come from each resource's deterministic RNG, so the same `(fleet,
    /// seed)` reproduces the same starting layout.
    ///
    /// # Errors
    ///
    /// - [`SimError::AlreadyInitialized`] if the store is non-empty —
    ///   re-seeding mid-run would corrupt in-flight route progress.
    /// - [`SimError::DuplicateResource`] if two descriptors share an id.
    pub fn initialize(
        &mut self,
        fleet: &[ResourceDescriptor],
        seed:  u64,
        now:   Timestamp,
    ) -> SimResult<ResourceRngs> {
        if !self.states.is_empty() {
            return Err(SimError::AlreadyInitialized { resources: self.states.len() });
        }

        let mut fleet: Vec<ResourceDescriptor> = fleet.to_vec();
        fleet.sort_by_key(|d| d.id);
        for pair in fleet.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(SimError::DuplicateResource(pair[0].id));
            }
        }

        let mut kind_counts: FxHashMap<ResourceKind, u32> = FxHashMap::default();
        for d in &fleet {
            *kind_counts.entry(d.kind).or_insert(0) += 1;
        }

        let mut rngs = Vec::with_capacity(fleet.len());
        for d in &fleet {
            let mut rng = ResourceRng::new(seed, d.id);
            let kind_count = kind_counts[&d.kind];
            let plan = assign_route(d.kind, d.unit_index, kind_count, &mut rng);

            self.index.insert(d.id, self.states.len());
            self.states.push(KinematicState::from_plan(d.id, plan, now, &mut rng));
            rngs.push(rng);
        }

        info!(resources = self.states.len(), "fleet store initialized");
        Ok(ResourceRngs { inner: rngs })
    }

    /// Drop all tracked state so `initialize` may be called again.
    pub fn reset(&mut self) {
        self.states.clear();
        self.index.clear();
    }

    /// Look up one resource's state.
    ///
    /// # Errors
    ///
    /// [`SimError::ResourceNotFound`] for an unknown id — non-fatal, the
    /// request layer translates it.
    pub fn get(&self, id: ResourceId) -> SimResult<&KinematicState> {
        self.index
            .get(&id)
            .map(|&i| &self.states[i])
            .ok_or(SimError::ResourceNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for FleetStore {
    fn default() -> Self {
        Self::new()
    }
}
