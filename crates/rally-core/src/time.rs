//! Wall-clock timestamps.
//!
//! Everything time-related in this toolkit — arrival times, chat messages,
//! event start times — is a plain Unix-seconds counter.  The libraries never
//! read the system clock: the caller stamps each location fix, which keeps
//! every recomputation replayable and every test deterministic.

use std::fmt;

/// A Unix timestamp (seconds since epoch, UTC).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Return the timestamp `secs` seconds after `self`.
    #[inline]
    pub fn offset_secs(self, secs: i64) -> Timestamp {
        Timestamp(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }

    /// Break the UTC time of day into (hour, minute, second) components.
    /// Useful for human-readable arrival times without a datetime library.
    pub fn time_of_day(self) -> (u32, u32, u32) {
        let secs = self.0.rem_euclid(86_400) as u64;
        let hours = (secs / 3_600) as u32;
        let minutes = ((secs % 3_600) / 60) as u32;
        let seconds = (secs % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for Timestamp {
    /// `hh:mm` UTC — the form the reporting view shows arrival times in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, _) = self.time_of_day();
        write!(f, "{h:02}:{m:02}")
    }
}
