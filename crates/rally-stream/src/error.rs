//! Positioning failure modes.

use thiserror::Error;

/// The three ways a platform positioning watch fails, mirroring the
/// Geolocation API's error codes.
///
/// A stream error is an *event*, not a crash: the tracker surfaces it as a
/// dismissible notice and keeps projecting from the last known fix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StreamError {
    #[error("positioning permission denied — enable location access")]
    PermissionDenied,

    #[error("position unavailable — no GPS or network fix")]
    PositionUnavailable,

    #[error("positioning timed out waiting for a fix")]
    Timeout,
}
