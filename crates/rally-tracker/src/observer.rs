//! Tracker observer trait for rendering and data collection.

use rally_core::{MemberId, Timestamp};
use rally_stream::{LocationFix, StreamError};

use crate::RadarFrame;

/// Callbacks invoked by the tracker as it processes the location stream.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl TrackerObserver for ArrivalPrinter {
///     fn on_arrival(&mut self, member: MemberId, at: Timestamp) {
///         println!("{member} arrived at {at}");
///     }
/// }
/// ```
pub trait TrackerObserver {
    /// Called after a valid fix updates the device member's location,
    /// before the projection runs.
    fn on_fix(&mut self, _member: MemberId, _fix: &LocationFix) {}

    /// Called with the freshly computed radar frame after every
    /// recomputation.
    fn on_frame(&mut self, _frame: &RadarFrame) {}

    /// Called exactly once per member per session, on the sample that
    /// latches them as arrived.
    fn on_arrival(&mut self, _member: MemberId, _at: Timestamp) {}

    /// Called when the positioning stream fails.  The error is also held as
    /// the tracker's current notice until dismissed.
    fn on_notice(&mut self, _error: StreamError) {}
}

/// A [`TrackerObserver`] that does nothing.  Use when you need to drive the
/// tracker but don't want callbacks.
pub struct NoopObserver;

impl TrackerObserver for NoopObserver {}
