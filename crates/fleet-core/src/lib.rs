//! `fleet-core` — foundational types for the fleetsim position engine.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It
//! intentionally has no `fleet-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `ResourceId`, `JobId`                             |
//! | [`geo`]      | `GeoPoint`, haversine distance, bearing, lerp     |
//! | [`time`]     | `Timestamp` (unix milliseconds)                   |
//! | [`mode`]     | `OperatingMode` enum                              |
//! | [`resource`] | `ResourceKind`, `ResourceDescriptor`              |
//! | [`dispatch`] | `JobStatus`, `JobAssignment`, `DispatchStatus`    |
//! | [`rng`]      | `ResourceRng` (per-resource), `FleetRng` (global) |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod dispatch;
pub mod geo;
pub mod ids;
pub mod mode;
pub mod resource;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dispatch::{DispatchStatus, JobAssignment, JobStatus};
pub use geo::GeoPoint;
pub use ids::{JobId, ResourceId};
pub use mode::OperatingMode;
pub use resource::{ResourceDescriptor, ResourceKind};
pub use rng::{FleetRng, ResourceRng};
pub use time::Timestamp;
