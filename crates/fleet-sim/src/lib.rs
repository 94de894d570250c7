//! `fleet-sim` — the position simulation core.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`state`]  | `KinematicState` — one mutable record per resource    |
//! | [`store`]  | `FleetStore` + `ResourceRngs` — owns all sim state    |
//! | [`engine`] | `KinematicEngine::tick` — the integrator              |
//! | [`status`] | `resolve_status` — job assignments → dispatch status  |
//! | [`error`]  | `SimError`, `SimResult`                               |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `parallel` | Rayon parallel per-resource integration.             |
//! | `serde`    | Serialize/Deserialize on the wire types.             |

pub mod engine;
pub mod error;
pub mod state;
pub mod status;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{KinematicEngine, PositionBatch, PositionSample, TrackedPosition};
pub use error::{SimError, SimResult};
pub use state::KinematicState;
pub use status::resolve_status;
pub use store::{FleetStore, ResourceRngs};
