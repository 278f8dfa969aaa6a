//! `rally-tracker` — the fix-driven update loop for the rallypoint toolkit.
//!
//! # One sample, one recomputation
//!
//! ```text
//! for each item from the positioning stream:
//!   ① Guard    — discard the sample if its subscription is stale or its
//!                coordinates fail boundary validation.
//!   ② Locate   — record the device member's new position; clear any notice.
//!   ③ Project  — run the radar projection for the active circle's spot.
//!   ④ Latch    — first sample inside the arrival threshold flips a member
//!                to Arrived and stamps the time, exactly once per session.
//!   ⑤ Emit     — hand the frame (and any arrival) to the observer.
//! ```
//!
//! Everything is single-threaded and synchronous: all mutation is serialized
//! through whoever holds `&mut Tracker`, so there is nothing to lock.  A
//! positioning failure never stops the loop — it becomes a dismissible
//! notice while projection keeps running on the last known fix.
//!
//! # Crate layout
//!
//! | Module           | Contents                                        |
//! |------------------|--------------------------------------------------|
//! | [`builder`]      | `TrackerBuilder` — validated construction        |
//! | [`observer`]     | `TrackerObserver`, `NoopObserver`                |
//! | [`subscription`] | `SubscriptionId` — stale-sample guard            |
//! | [`tracker`]      | `Tracker`, `RadarFrame`, the loop itself         |
//! | [`error`]        | `TrackerError`, `TrackerResult`                  |

pub mod builder;
pub mod error;
pub mod observer;
pub mod subscription;
pub mod tracker;


pub use builder::TrackerBuilder;
pub use error::{TrackerError, TrackerResult};
pub use observer::{NoopObserver, TrackerObserver};
pub use subscription::SubscriptionId;
pub use tracker::{RadarFrame, Tracker};
