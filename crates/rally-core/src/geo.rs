//! Geographic coordinate type and distance math.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  The arrival threshold this
//! toolkit works with is tens of metres (0.03 mi ≈ 48 m), and a roster holds
//! dozens of members, not millions — so double precision costs nothing and
//! removes rounding from the threshold comparisons entirely.

/// Mean Earth radius in miles, the unit every distance in this toolkit uses.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Miles spanned by one degree of latitude (constant everywhere on the globe).
pub const MILES_PER_DEGREE_LAT: f64 = EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Boundary-validated constructor.
    ///
    /// Returns `None` for NaN/infinite values or coordinates outside
    /// [−90, 90] × [−180, 180].  Device fixes and collaborator payloads are
    /// validated here once; everything downstream treats an invalid
    /// coordinate as a missing location rather than feeding NaN through the
    /// trigonometric pipeline.
    pub fn checked(lat: f64, lon: f64) -> Option<Self> {
        let p = Self { lat, lon };
        p.is_valid().then_some(p)
    }

    /// `true` if both components are finite and in range.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in miles.
    ///
    /// Symmetric, zero for identical points, and monotone in angular
    /// separation.  The `atan2(√a, √(1−a))` form stays well-conditioned for
    /// antipodal points and for longitude-only separations near the poles,
    /// where the cosine term shrinks toward zero.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
