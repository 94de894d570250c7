//! Per-tick delivery callback for the publish/subscribe layer.

use fleet_sim::TrackedPosition;

use crate::FeedError;

/// Receives the full position batch once per integration cycle.
///
/// Implementations typically re-serialize the batch onto a transport (a
/// WebSocket fan-out, a message bus).  A returned error is logged and
/// isolated to this subscriber; [`FeedError::Closed`] additionally
/// unregisters it.  Delivery runs on the driver thread, so implementations
/// should hand off rather than block.
pub trait TickSubscriber: Send {
    fn deliver(&mut self, batch: &[TrackedPosition]) -> Result<(), FeedError>;
}

/// Closures work as subscribers directly.
impl<F> TickSubscriber for F
where
    F: FnMut(&[TrackedPosition]) -> Result<(), FeedError> + Send,
{
    fn deliver(&mut self, batch: &[TrackedPosition]) -> Result<(), FeedError> {
        self(batch)
    }
}
