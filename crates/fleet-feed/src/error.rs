use thiserror::Error;

/// Why a subscriber could not take delivery of a tick batch.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The subscriber's downstream is permanently gone (e.g. a dropped
    /// connection).  The feed unregisters it.
    #[error("subscriber closed")]
    Closed,

    /// Transient delivery failure; the subscriber stays registered and gets
    /// the next batch.
    #[error("delivery failed: {0}")]
    Delivery(String),
}
