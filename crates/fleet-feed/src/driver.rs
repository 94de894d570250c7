//! The fixed-interval tick driver thread.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::info;

use fleet_core::Timestamp;

use crate::PositionFeed;

/// Reference tick interval: one integration cycle every 2 seconds.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(2);

/// Driver configuration.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Wall-clock time between integration cycles.
    pub interval: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { interval: DEFAULT_TICK_INTERVAL }
    }
}

/// A background thread invoking [`PositionFeed::run_tick`] at a fixed
/// wall-clock interval.
///
/// Ticks never overlap — there is exactly one driver thread and it runs
/// cycles back to back.  A cycle that overruns the interval simply delays
/// the next one; the elapsed-time integration absorbs the drift.
///
/// [`stop`][Self::stop] (or dropping the driver) shuts down immediately:
/// the sleeping thread is unparked, finishes nothing mid-resource (each
/// resource update is applied atomically under the engine lock), and is
/// joined before returning.
pub struct FeedDriver {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FeedDriver {
    /// Start ticking `feed` every `config.interval`.
    pub fn spawn(feed: Arc<PositionFeed>, config: FeedConfig) -> io::Result<FeedDriver> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("fleet-feed-driver".into())
            .spawn(move || {
                info!(interval_ms = config.interval.as_millis() as u64, "feed driver started");
                while !stop_flag.load(Ordering::Relaxed) {
                    let started = Instant::now();
                    feed.run_tick(Timestamp::now());

                    // Sleep out the rest of the interval; re-check the stop
                    // flag on spurious wakeups.
                    while !stop_flag.load(Ordering::Relaxed) {
                        let elapsed = started.elapsed();
                        if elapsed >= config.interval {
                            break;
                        }
                        thread::park_timeout(config.interval - elapsed);
                    }
                }
                info!("feed driver stopped");
            })?;

        Ok(FeedDriver { shutdown, handle: Some(handle) })
    }

    /// Stop ticking and join the driver thread.
    pub fn stop(mut self) {
        self.shutdown_and_join();
    }

    fn shutdown_and_join(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
    }
}

impl Drop for FeedDriver {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}
