//! Fluent builder for constructing a [`Tracker`].

use rally_core::{CircleId, MemberId};
use rally_meetup::SpotBook;
use rally_radar::RadarConfig;
use rally_roster::CircleRoster;

use crate::{Tracker, TrackerError, TrackerResult};

/// Fluent builder for [`Tracker`].
///
/// # Required inputs
///
/// - [`RadarConfig`] — max distance, arrival threshold, disc size
/// - [`CircleRoster`] — members and circles (the device member must already
///   belong to the starting circle)
/// - the starting circle and the device member
///
/// # Optional inputs
///
/// | Method       | Default             |
/// |--------------|---------------------|
/// | `.spots(b)`  | empty `SpotBook`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut tracker = TrackerBuilder::new(RadarConfig::default(), roster, circle, me)
///     .build()?;
/// let sub = tracker.subscribe();
/// tracker.run(sub, &mut source, &mut NoopObserver)?;
/// ```
pub struct TrackerBuilder {
    config: RadarConfig,
    roster: CircleRoster,
    spots: Option<SpotBook>,
    active_circle: CircleId,
    device_member: MemberId,
}

impl TrackerBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        config: RadarConfig,
        roster: CircleRoster,
        active_circle: CircleId,
        device_member: MemberId,
    ) -> Self {
        Self {
            config,
            roster,
            spots: None,
            active_circle,
            device_member,
        }
    }

    /// Supply a pre-populated spot book (e.g. restored by the persistence
    /// collaborator).  If not called, the book starts empty and the radar is
    /// off until a spot is marked.
    pub fn spots(mut self, spots: SpotBook) -> Self {
        self.spots = Some(spots);
        self
    }

    /// Validate inputs and return a ready-to-subscribe [`Tracker`].
    pub fn build(self) -> TrackerResult<Tracker> {
        self.config.validate().map_err(TrackerError::Config)?;

        self.roster.member(self.device_member)?;
        let circle = self.roster.circle(self.active_circle)?;
        if !circle.contains(self.device_member) {
            return Err(TrackerError::DeviceMemberNotInCircle {
                member: self.device_member,
                circle: self.active_circle,
            });
        }

        Ok(Tracker::new(
            self.config,
            self.roster,
            self.spots.unwrap_or_default(),
            self.active_circle,
            self.device_member,
        ))
    }
}
