//! Radar tunables.

/// The three knobs of the radar view.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to the tracker builder; the defaults reproduce the shipped app.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadarConfig {
    /// Members farther than this from the meeting spot are excluded from the
    /// radar entirely.  Default: 1.0 mile.
    pub max_distance_miles: f64,

    /// A member closer than this counts as arrived.  Default: 0.03 miles
    /// (≈ 50 m).  Deployments have shipped anywhere from 0.03 to 0.05 —
    /// neither value is authoritative, so it stays configurable.
    pub arrival_threshold_miles: f64,

    /// Diameter of the rendered disc, in whatever linear unit the consuming
    /// view uses (pixels in the shipped app).  Independent of the geometry.
    pub disc_diameter: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            max_distance_miles:      1.0,
            arrival_threshold_miles: 0.03,
            disc_diameter:           300.0,
        }
    }
}

impl RadarConfig {
    /// Half the disc diameter — the radius members at `max_distance_miles`
    /// land on.
    #[inline]
    pub fn disc_radius(&self) -> f64 {
        self.disc_diameter / 2.0
    }

    /// Sanity-check the tunables.  Called by the tracker builder so a bad
    /// config is rejected once, up front, instead of producing NaN positions
    /// sample after sample.
    pub fn validate(&self) -> Result<(), String> {
        if !self.max_distance_miles.is_finite() || self.max_distance_miles < 0.0 {
            return Err(format!("max_distance_miles must be finite and >= 0, got {}", self.max_distance_miles));
        }
        if !self.arrival_threshold_miles.is_finite() || self.arrival_threshold_miles < 0.0 {
            return Err(format!("arrival_threshold_miles must be finite and >= 0, got {}", self.arrival_threshold_miles));
        }
        if !self.disc_diameter.is_finite() || self.disc_diameter <= 0.0 {
            return Err(format!("disc_diameter must be finite and > 0, got {}", self.disc_diameter));
        }
        Ok(())
    }
}
