//! live-feed — reference wiring of the fleetsim engine.
//!
//! Seeds a mixed fleet around the Sundsvall operating area, starts the 2 s
//! tick driver, streams every batch as a JSON line (the same shape the
//! WebSocket fan-out re-serializes), and answers a few snapshot and
//! dispatch-status queries the way a request handler would.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use fleet_catalog::DEPOT;
use fleet_core::{
    JobAssignment, JobId, JobStatus, ResourceDescriptor, ResourceId, ResourceKind, Timestamp,
};
use fleet_feed::{DEFAULT_TICK_INTERVAL, FeedConfig, FeedDriver, FeedError, PositionFeed, TickSubscriber};
use fleet_sim::{KinematicEngine, TrackedPosition, resolve_status};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const SNAPSHOT_POLLS: u32 = 3;
const POLL_GAP: Duration = Duration::from_secs(3);

// ── Fleet ─────────────────────────────────────────────────────────────────────

/// Twelve units: three plows, four haulers, two loaders, two excavators, and
/// one service van.
fn build_fleet() -> Vec<ResourceDescriptor> {
    let roster = [
        (ResourceKind::Plow, 3),
        (ResourceKind::Haul, 4),
        (ResourceKind::Loader, 2),
        (ResourceKind::Excavator, 2),
        (ResourceKind::Utility, 1),
    ];

    let mut fleet = Vec::new();
    let mut next_id = 1u32;
    for (kind, count) in roster {
        for unit_index in 0..count {
            fleet.push(ResourceDescriptor::new(ResourceId(next_id), kind, unit_index));
            next_id += 1;
        }
    }
    fleet
}

/// A sample of the external job catalog: hauler 4 is mid-job, hauler 5 is
/// dispatched, plow 1 has only finished work behind it.
fn sample_jobs() -> Vec<JobAssignment> {
    vec![
        JobAssignment::new(JobId(100), ResourceId(4), JobStatus::InProgress),
        JobAssignment::new(JobId(101), ResourceId(4), JobStatus::Assigned),
        JobAssignment::new(JobId(102), ResourceId(5), JobStatus::Assigned),
        JobAssignment::new(JobId(103), ResourceId(1), JobStatus::Completed),
        JobAssignment::new(JobId(104), ResourceId(2), JobStatus::Cancelled),
    ]
}

// ── JSON-lines subscriber ─────────────────────────────────────────────────────

/// Prints each tick batch as one JSON array line — the wire shape the
/// publish/subscribe layer sends to every connected listener.
struct JsonLines;

impl TickSubscriber for JsonLines {
    fn deliver(&mut self, batch: &[TrackedPosition]) -> Result<(), FeedError> {
        let line = serde_json::to_string(batch).map_err(|e| FeedError::Delivery(e.to_string()))?;
        println!("{line}");
        Ok(())
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 1. Build the fleet and seed the engine.
    let fleet = build_fleet();
    let mut engine = KinematicEngine::new();
    engine.initialize(&fleet, SEED, Timestamp::now())?;
    println!("=== live-feed — fleetsim engine ===");
    println!("Units: {}  |  Seed: {SEED}  |  Tick: {:?}", fleet.len(), DEFAULT_TICK_INTERVAL);
    println!("Operating area around depot {DEPOT}");
    println!();

    // 2. Wrap the engine in the feed and register the broadcast subscriber.
    let feed = Arc::new(PositionFeed::new(engine));
    feed.subscribe(Box::new(JsonLines));

    // 3. Start the tick driver at the reference interval.
    let driver = FeedDriver::spawn(Arc::clone(&feed), FeedConfig::default())?;

    // 4. Poll snapshots like a request handler answering "list live positions".
    for poll in 1..=SNAPSHOT_POLLS {
        std::thread::sleep(POLL_GAP);
        let snapshot = feed.snapshot();
        println!("poll {poll}: {} live positions", snapshot.len());
    }

    // 5. Assemble a dispatch board from the job catalog.
    let jobs = sample_jobs();
    println!();
    println!("{:<10} {:<11} {:<10} {:>9}", "Unit", "Kind", "Status", "km/h");
    println!("{}", "-".repeat(43));
    for descriptor in &fleet {
        let state = feed.state(descriptor.id)?;
        let status = resolve_status(descriptor.id, &jobs);
        println!(
            "{:<10} {:<11} {:<10} {:>9.1}",
            descriptor.id.0,
            descriptor.kind.to_string(),
            status.to_string(),
            state.speed_kmh,
        );
    }

    // 6. Shut down: immediate, no half-applied tick.
    driver.stop();
    Ok(())
}
