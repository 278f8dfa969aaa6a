//! The disc projection: range filter → bearing proxy → cartesian position.

use rally_core::{GeoPoint, MemberId};

use crate::RadarConfig;

// ── Blip ──────────────────────────────────────────────────────────────────────

/// One in-range member's position on the radar disc.
///
/// `x`/`y` are in disc units with the origin at the disc's top-left corner
/// and the meeting spot at the center (`disc_radius`, `disc_radius`); angle 0
/// points north, i.e. straight up.  Consumers must key blips by `member` —
/// the order of a frame's blips is not significant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blip {
    pub member: MemberId,
    pub x: f64,
    pub y: f64,

    /// Great-circle distance from the meeting spot, in miles.
    pub distance_miles: f64,

    /// `true` if this sample puts the member inside the arrival threshold.
    /// This is the *instantaneous* classification; the tracker latches it
    /// into the member's status so nobody un-arrives.
    pub within_arrival_radius: bool,
}

// ── Bearing proxy ─────────────────────────────────────────────────────────────

/// Direction from `origin` to `target` as an angle in radians, 0 = north,
/// increasing clockwise (east = π/2).
///
/// This is an equirectangular longitude-scaling approximation, **not** a true
/// initial-bearing formula: `Δlon` is flattened by `cos(origin.lat)` and the
/// pair fed straight to `atan2`.  At radar range (≤ 1 mile) the error against
/// true bearing is far below a pixel, and the shipped app's placement is
/// reproduced exactly.
#[inline]
pub fn bearing_proxy(origin: GeoPoint, target: GeoPoint) -> f64 {
    let d_lat = target.lat - origin.lat;
    let d_lon = (target.lon - origin.lon) * origin.lat.to_radians().cos();
    d_lon.atan2(d_lat)
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Project every in-range member onto the radar disc.
///
/// Input is `(member, location)` pairs — members without a known location
/// never reach this function (the caller filters them out, per the contract
/// that a missing location silently excludes a member).  Output is
/// deterministic for identical inputs and contains each input member at most
/// once, in input order.
///
/// Filtering is inclusive: `distance == max_distance_miles` stays in and
/// lands exactly on the disc edge.  With `max_distance_miles == 0` only
/// members at distance 0 pass, and their radius is pinned to 0 rather than
/// dividing by zero.
pub fn project<I>(spot: GeoPoint, members: I, config: &RadarConfig) -> Vec<Blip>
where
    I: IntoIterator<Item = (MemberId, GeoPoint)>,
{
    let half = config.disc_radius();

    members
        .into_iter()
        .filter_map(|(member, loc)| {
            let distance_miles = spot.distance_miles(loc);
            if distance_miles > config.max_distance_miles {
                return None;
            }

            let r = if config.max_distance_miles > 0.0 {
                (distance_miles / config.max_distance_miles) * half
            } else {
                0.0
            };

            let angle = bearing_proxy(spot, loc);
            Some(Blip {
                member,
                x: half + r * angle.sin(),
                y: half - r * angle.cos(),
                distance_miles,
                within_arrival_radius: distance_miles < config.arrival_threshold_miles,
            })
        })
        .collect()
}
