//! The meeting spot — what a circle is currently rallying toward.

use rally_core::{GeoPoint, MemberId, SpotId, Timestamp};

/// Target coordinates plus the descriptive and attendance metadata the
/// surrounding views need.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetingSpot {
    pub id: SpotId,
    pub title: String,
    pub description: String,
    /// When the meetup starts (quick-marks use the marking time).
    pub starts_at: Timestamp,
    pub venue_name: String,
    pub address: String,
    pub coords: GeoPoint,
    /// The radar range for this meetup, in miles.
    pub radius_miles: f64,
    /// Members who said they are coming.  Distinct from who actually shows
    /// up — the attendance report compares the two.
    pub(crate) confirmed: Vec<MemberId>,
    /// Door-to-door estimate for the device member, if one was computed.
    pub travel_minutes: Option<u32>,
    /// Set when the meetup is finished and the spot moves to the archive.
    pub archived: bool,
}

impl MeetingSpot {
    /// A quick-marked spot at the device member's current position.
    pub fn marked_here(id: SpotId, coords: GeoPoint, at: Timestamp, by: MemberId) -> Self {
        Self {
            id,
            title: "Meeting point".to_owned(),
            description: String::new(),
            starts_at: at,
            venue_name: "Current location".to_owned(),
            address: String::new(),
            coords,
            radius_miles: 1.0,
            confirmed: vec![by],
            travel_minutes: None,
            archived: false,
        }
    }

    /// Confirmed-attendee identities, in confirmation order.
    pub fn confirmed(&self) -> &[MemberId] {
        &self.confirmed
    }

    pub fn is_confirmed(&self, member: MemberId) -> bool {
        self.confirmed.contains(&member)
    }

    /// Add to the confirmed set.  Returns `false` if already confirmed.
    pub fn confirm(&mut self, member: MemberId) -> bool {
        if self.confirmed.contains(&member) {
            return false;
        }
        self.confirmed.push(member);
        true
    }
}
