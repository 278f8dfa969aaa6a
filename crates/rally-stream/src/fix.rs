//! One positioning sample.

use rally_core::{GeoPoint, Timestamp};

/// A timestamped coordinate sample for the device member.
///
/// Coordinates are *not* validated here — the tracker checks them at the
/// point of application and treats garbage as a missing location, so a
/// misbehaving source cannot push NaN into the projection.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationFix {
    pub coords: GeoPoint,
    pub at: Timestamp,
}

impl LocationFix {
    #[inline]
    pub fn new(coords: GeoPoint, at: Timestamp) -> Self {
        Self { coords, at }
    }
}
