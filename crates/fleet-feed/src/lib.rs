//! `fleet-feed` — the broadcast/polling adapter around the kinematic engine.
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`feed`]       | `PositionFeed` — snapshot reads + subscriber fan-out |
//! | [`driver`]     | `FeedDriver` — the fixed-interval tick thread        |
//! | [`subscriber`] | `TickSubscriber` trait                               |
//! | [`error`]      | `FeedError`                                          |
//!
//! # Concurrency
//!
//! The feed enforces the single-writer model: the engine lives behind a
//! mutex that only `run_tick` holds for writing, and the latest batch is
//! published by swapping an `Arc` — readers between two ticks share the
//! exact same allocation, so concurrent snapshots are bit-identical and
//! never observe a half-applied tick.

pub mod driver;
pub mod error;
pub mod feed;
pub mod subscriber;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use driver::{DEFAULT_TICK_INTERVAL, FeedConfig, FeedDriver};
pub use error::FeedError;
pub use feed::PositionFeed;
pub use subscriber::TickSubscriber;
