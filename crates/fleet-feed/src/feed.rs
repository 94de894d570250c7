//! `PositionFeed` — the shared handle request handlers and the driver thread
//! both hold.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use fleet_core::{ResourceId, Timestamp};
use fleet_sim::{KinematicEngine, KinematicState, PositionBatch, SimResult, TrackedPosition};

use crate::{FeedError, TickSubscriber};

/// Owns the engine and publishes its output two ways: a synchronous snapshot
/// for request/response callers and a per-tick push to subscribers.
///
/// Single-writer discipline: only [`run_tick`][Self::run_tick] takes the
/// engine mutex for writing, and it is called from one place (the driver
/// thread, or a test driving time by hand).  Readers share the latest batch
/// through an `Arc` swap and never contend with integration.
pub struct PositionFeed {
    engine: Mutex<KinematicEngine>,
    latest: RwLock<Arc<PositionBatch>>,
    subscribers: Mutex<Vec<Box<dyn TickSubscriber>>>,
}

impl PositionFeed {
    /// Wrap an initialized engine.
    pub fn new(engine: KinematicEngine) -> Self {
        Self {
            engine: Mutex::new(engine),
            latest: RwLock::new(Arc::new(Vec::new())),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a subscriber for per-tick batches.
    pub fn subscribe(&self, subscriber: Box<dyn TickSubscriber>) {
        self.subscribers.lock().push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// The latest tick's full batch.  Two calls between ticks return the
    /// same allocation — bit-identical by construction.  Empty before the
    /// first tick.
    pub fn snapshot(&self) -> Arc<PositionBatch> {
        Arc::clone(&self.latest.read())
    }

    /// One resource's latest sample, if it was in the last batch.
    pub fn position(&self, id: ResourceId) -> Option<TrackedPosition> {
        let latest = self.snapshot();
        latest
            .binary_search_by_key(&id, |t| t.resource)
            .ok()
            .map(|i| latest[i])
    }

    /// A point-in-time copy of one resource's full kinematic state (mode,
    /// route progress, …) for request handlers that need more than the last
    /// sample.
    pub fn state(&self, id: ResourceId) -> SimResult<KinematicState> {
        self.engine.lock().store.get(id).cloned()
    }

    /// Run one integration cycle at `now`: advance the engine, publish the
    /// batch, and fan out to subscribers.
    ///
    /// Fan-out happens after the engine lock is released, so a slow
    /// subscriber delays at most the delivery, never a concurrent reader.
    /// Failures are isolated per subscriber: a transient error is logged and
    /// the subscriber kept, a closed subscriber is unregistered.  The tick
    /// itself always completes.
    pub fn run_tick(&self, now: Timestamp) -> Arc<PositionBatch> {
        let batch = {
            let mut engine = self.engine.lock();
            Arc::new(engine.tick(now))
        };
        *self.latest.write() = Arc::clone(&batch);

        let mut subscribers = self.subscribers.lock();
        subscribers.retain_mut(|sub| match sub.deliver(&batch) {
            Ok(()) => true,
            Err(FeedError::Closed) => {
                debug!("dropping closed subscriber");
                false
            }
            Err(e) => {
                warn!(error = %e, "subscriber delivery failed");
                true
            }
        });

        batch
    }
}
