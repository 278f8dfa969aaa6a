//! `rally-core` — foundational types for the rallypoint meetup toolkit.
//!
//! This crate is a dependency of every other `rally-*` crate.  It
//! intentionally has no `rally-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `MemberId`, `CircleId`, `SpotId`, `EventId`, `MessageId` |
//! | [`geo`]     | `GeoPoint`, haversine distance in miles               |
//! | [`time`]    | `Timestamp` (unix seconds, hh:mm formatting)          |
//! | [`error`]   | `RallyError`, `RallyResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RallyError, RallyResult};
pub use geo::GeoPoint;
pub use ids::{CircleId, EventId, MemberId, MessageId, SpotId};
pub use time::Timestamp;
