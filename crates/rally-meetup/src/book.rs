//! The spot book: one active spot per circle, plus the archive.

use std::collections::BTreeMap;

use rally_core::{CircleId, GeoPoint, MemberId, SpotId, Timestamp};

use crate::{EventListing, MeetingSpot, MeetupError, MeetupResult};

/// Per-circle meetup state.
///
/// The active slot is a `BTreeMap<CircleId, MeetingSpot>`, which makes the
/// "exactly one active spot per circle" invariant structural rather than
/// checked.  Finished spots move to a flat archive, newest first — the
/// history view reads it top-down.
#[derive(Default)]
pub struct SpotBook {
    active: BTreeMap<CircleId, MeetingSpot>,
    archive: Vec<MeetingSpot>,
    next_spot: u32,
}

impl SpotBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> SpotId {
        let id = SpotId(self.next_spot);
        self.next_spot += 1;
        id
    }

    // ── Creating spots ────────────────────────────────────────────────────

    /// Install `spot` as `circle`'s active spot, returning any displaced one.
    /// Quick-marking over an existing spot replaces it silently.
    pub fn mark(&mut self, circle: CircleId, spot: MeetingSpot) -> Option<MeetingSpot> {
        self.active.insert(circle, spot)
    }

    /// Quick-mark: rally `circle` to `coords` right now.
    pub fn mark_here(
        &mut self,
        circle: CircleId,
        coords: GeoPoint,
        at: Timestamp,
        by: MemberId,
    ) -> SpotId {
        let id = self.next_id();
        self.mark(circle, MeetingSpot::marked_here(id, coords, at, by));
        id
    }

    /// Accept a suggested event as `circle`'s meetup.
    pub fn accept_event(
        &mut self,
        circle: CircleId,
        listing: EventListing,
        radius_miles: f64,
        by: MemberId,
    ) -> SpotId {
        let id = self.next_id();
        self.mark(circle, listing.into_spot(id, radius_miles, by));
        id
    }

    // ── Reading ───────────────────────────────────────────────────────────

    /// The circle's active spot, if it has one.
    pub fn active(&self, circle: CircleId) -> Option<&MeetingSpot> {
        self.active.get(&circle)
    }

    /// Finished spots, newest first.
    pub fn archive(&self) -> &[MeetingSpot] {
        &self.archive
    }

    /// Look up a finished spot by identity (for the reporting view).
    pub fn archived_spot(&self, spot: SpotId) -> MeetupResult<&MeetingSpot> {
        self.archive
            .iter()
            .find(|s| s.id == spot)
            .ok_or(MeetupError::SpotNotFound(spot))
    }

    // ── Lifecycle mutation ────────────────────────────────────────────────

    /// Add `member` to the active spot's confirmed set.
    /// Returns `false` if the member had already confirmed.
    pub fn confirm(&mut self, circle: CircleId, member: MemberId) -> MeetupResult<bool> {
        let spot = self
            .active
            .get_mut(&circle)
            .ok_or(MeetupError::NoActiveSpot(circle))?;
        Ok(spot.confirm(member))
    }

    /// Record the device member's door-to-door estimate on the active spot.
    pub fn set_travel_estimate(&mut self, circle: CircleId, minutes: u32) -> MeetupResult<()> {
        let spot = self
            .active
            .get_mut(&circle)
            .ok_or(MeetupError::NoActiveSpot(circle))?;
        spot.travel_minutes = Some(minutes);
        Ok(())
    }

    /// Finish the meetup: flag the active spot archived, move it to the
    /// archive, and free the circle's active slot.
    pub fn finish(&mut self, circle: CircleId) -> MeetupResult<SpotId> {
        let mut spot = self
            .active
            .remove(&circle)
            .ok_or(MeetupError::NoActiveSpot(circle))?;
        spot.archived = true;
        let id = spot.id;
        self.archive.insert(0, spot);
        Ok(id)
    }
}
