//! One person's state.

use rally_core::{GeoPoint, MemberId, Timestamp};

/// Where a member stands relative to the active meetup.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberStatus {
    /// Sharing location, not yet at the spot (default state).
    #[default]
    Active,
    /// Latched inside the arrival threshold.  Never reverts within a session.
    Arrived,
    /// No longer delivering location updates.
    Offline,
}

impl MemberStatus {
    /// Human-readable label, useful for CSV column values and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            MemberStatus::Active  => "active",
            MemberStatus::Arrived => "arrived",
            MemberStatus::Offline => "offline",
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person in the roster.
///
/// The last-known location is optional — a member who has never shared one
/// (or whose fixes were rejected at the boundary) simply never appears on the
/// radar.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub avatar_url: String,
    pub location: Option<GeoPoint>,
    pub status: MemberStatus,
    /// Stamped exactly once, by the first sample inside the arrival threshold.
    pub arrival_time: Option<Timestamp>,
}

impl Member {
    pub(crate) fn new(id: MemberId, name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_url: avatar_url.into(),
            location: None,
            status: MemberStatus::Active,
            arrival_time: None,
        }
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.status == MemberStatus::Arrived
    }
}
