//! A seeded wandering fix source.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rally_core::geo::MILES_PER_DEGREE_LAT;
use rally_core::{GeoPoint, Timestamp};

use crate::{FixSource, LocationFix};

/// A [`FixSource`] that wanders from an origin in fixed-length steps of
/// random bearing.
///
/// Deterministic: the same seed always produces the same path, so a test
/// that wanders a member around a meeting spot is reproducible run to run.
/// The stream is infinite — bound it with `.take(n)`-style loop counts at
/// the call site.
pub struct RandomWalk {
    rng: SmallRng,
    position: GeoPoint,
    at: Timestamp,
    step_miles: f64,
    interval_secs: u32,
}

impl RandomWalk {
    pub fn new(
        seed: u64,
        origin: GeoPoint,
        step_miles: f64,
        start: Timestamp,
        interval_secs: u32,
    ) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            position: origin,
            at: start,
            step_miles,
            interval_secs,
        }
    }

    /// Where the walk currently stands (the last fix produced, or the origin).
    pub fn position(&self) -> GeoPoint {
        self.position
    }
}

impl FixSource for RandomWalk {
    fn next_fix(&mut self) -> Option<Result<LocationFix, crate::StreamError>> {
        let theta: f64 = self.rng.gen_range(0.0..std::f64::consts::TAU);

        // Degrees per mile: constant in latitude, widened by cos(lat) in
        // longitude.  Clamp the cosine so a walk near a pole stays finite.
        let d_lat = self.step_miles * theta.cos() / MILES_PER_DEGREE_LAT;
        let lon_scale = self.position.lat.to_radians().cos().max(1e-6);
        let d_lon = self.step_miles * theta.sin() / (MILES_PER_DEGREE_LAT * lon_scale);

        self.position = GeoPoint::new(
            (self.position.lat + d_lat).clamp(-90.0, 90.0),
            self.position.lon + d_lon,
        );
        self.at = self.at.offset_secs(self.interval_secs as i64);

        Some(Ok(LocationFix::new(self.position, self.at)))
    }
}
