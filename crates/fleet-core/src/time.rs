//! Wall-clock time model.
//!
//! # Design
//!
//! The integrator is driven by wall time, not a synthetic tick counter: every
//! integration step receives an explicit `now` and computes the elapsed
//! seconds since the resource's `last_update`.  `Timestamp` is therefore a
//! plain unix-millisecond count — cheap to copy, exact to compare, and
//! trivially serializable for the broadcast wire.
//!
//! Elapsed time is **signed**: a clock that jumps backward produces a
//! negative difference, and it is the integrator's job to clamp that to zero
//! rather than this type's job to hide it.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// An absolute wall-clock instant, stored as milliseconds since the unix
/// epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// The current wall-clock time.
    pub fn now() -> Timestamp {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(since_epoch.as_millis() as i64)
    }

    #[inline]
    pub const fn from_unix_millis(millis: i64) -> Timestamp {
        Timestamp(millis)
    }

    #[inline]
    pub const fn from_unix_secs(secs: i64) -> Timestamp {
        Timestamp(secs * 1_000)
    }

    #[inline]
    pub const fn as_unix_millis(self) -> i64 {
        self.0
    }

    /// The instant `millis` milliseconds after `self` (negative moves back).
    #[inline]
    pub const fn offset_millis(self, millis: i64) -> Timestamp {
        Timestamp(self.0 + millis)
    }

    /// The instant `secs` seconds after `self`.
    #[inline]
    pub const fn offset_secs(self, secs: i64) -> Timestamp {
        Timestamp(self.0 + secs * 1_000)
    }

    /// Signed seconds elapsed from `earlier` to `self`.
    ///
    /// Negative when `earlier` is in the future (clock skew) — callers decide
    /// whether to clamp.
    #[inline]
    pub fn seconds_since(self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0) as f64 / 1_000.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
