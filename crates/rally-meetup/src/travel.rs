//! Door-to-door travel estimate.

/// Estimate travel time in minutes for a given distance in miles.
///
/// The shipped heuristic: average city traffic at 15 min/mile plus a 10-min
/// buffer, floored at 10 minutes.  A proper routing service is an external
/// collaborator; this is the offline fallback it degrades to.
pub fn estimate_travel_minutes(distance_miles: f64) -> u32 {
    ((distance_miles * 15.0 + 10.0).round() as u32).max(10)
}
