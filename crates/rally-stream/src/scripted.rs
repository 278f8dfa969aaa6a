//! Replay a fixed sequence of fixes (and injected failures).

use std::collections::VecDeque;

use rally_core::{GeoPoint, Timestamp};

use crate::{FixSource, LocationFix, StreamError};

/// A [`FixSource`] that replays a queued script.
///
/// The workhorse for tests and demos: build it from explicit fixes, or use
/// [`walk`][Self::walk] to interpolate an approach between two points, then
/// splice failures in with [`push_error`][Self::push_error] to exercise the
/// notice path.
#[derive(Default)]
pub struct ScriptedRoute {
    queue: VecDeque<Result<LocationFix, StreamError>>,
}

impl ScriptedRoute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixes(fixes: impl IntoIterator<Item = LocationFix>) -> Self {
        Self {
            queue: fixes.into_iter().map(Ok).collect(),
        }
    }

    /// A straight-line approach from `from` to `to` in `steps` equal hops,
    /// one fix every `interval_secs`, endpoints included.
    ///
    /// Linear interpolation in degrees — fine at radar range, where the
    /// script only needs to cross the range and arrival thresholds in order.
    pub fn walk(
        from: GeoPoint,
        to: GeoPoint,
        steps: usize,
        start: Timestamp,
        interval_secs: u32,
    ) -> Self {
        let steps = steps.max(1);
        let fixes = (0..=steps).map(|i| {
            let f = i as f64 / steps as f64;
            LocationFix::new(
                GeoPoint::new(
                    from.lat + (to.lat - from.lat) * f,
                    from.lon + (to.lon - from.lon) * f,
                ),
                start.offset_secs(i as i64 * interval_secs as i64),
            )
        });
        Self::from_fixes(fixes)
    }

    /// Append a fix to the script.
    pub fn push_fix(&mut self, fix: LocationFix) {
        self.queue.push_back(Ok(fix));
    }

    /// Splice a positioning failure into the script.
    pub fn push_error(&mut self, err: StreamError) {
        self.queue.push_back(Err(err));
    }

    /// Entries left to replay.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl FixSource for ScriptedRoute {
    fn next_fix(&mut self) -> Option<Result<LocationFix, StreamError>> {
        self.queue.pop_front()
    }
}
