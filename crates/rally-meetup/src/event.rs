//! Suggested events.
//!
//! Listings arrive from the external AI collaborator as JSON; this module
//! only validates them at the boundary and converts an accepted one into a
//! [`MeetingSpot`].

use rally_core::{EventId, GeoPoint, MemberId, RallyError, RallyResult, SpotId, Timestamp};

use crate::MeetingSpot;

/// An event suggestion a circle can rally to.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventListing {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub starts_at: Timestamp,
    pub venue_name: String,
    pub address: String,
    pub coords: GeoPoint,
}

impl EventListing {
    /// Boundary-validated constructor.
    ///
    /// Generated payloads are untrusted: coordinates are checked here so a
    /// hallucinated `(512.0, NaN)` never enters the spot book.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        description: impl Into<String>,
        starts_at: Timestamp,
        venue_name: impl Into<String>,
        address: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> RallyResult<Self> {
        let coords =
            GeoPoint::checked(lat, lon).ok_or(RallyError::InvalidCoordinate { lat, lon })?;
        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            starts_at,
            venue_name: venue_name.into(),
            address: address.into(),
            coords,
        })
    }

    /// Accepting a suggestion turns it into a meeting spot: same metadata,
    /// plus a radar radius and the accepting member as first confirmed
    /// attendee.
    pub(crate) fn into_spot(self, id: SpotId, radius_miles: f64, by: MemberId) -> MeetingSpot {
        MeetingSpot {
            id,
            title: self.title,
            description: self.description,
            starts_at: self.starts_at,
            venue_name: self.venue_name,
            address: self.address,
            coords: self.coords,
            radius_miles,
            confirmed: vec![by],
            travel_minutes: None,
            archived: false,
        }
    }
}
