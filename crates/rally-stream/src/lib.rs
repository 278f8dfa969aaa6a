//! `rally-stream` — the device-positioning boundary.
//!
//! The real application feeds the tracker from a platform geolocation watch.
//! This crate models that boundary as a pluggable [`FixSource`] so tests,
//! demos, and replays drive the exact same tracker code path the device
//! does:
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`fix`]         | `LocationFix` — one timestamped coordinate sample   |
//! | [`source`]      | the `FixSource` trait                               |
//! | [`scripted`]    | `ScriptedRoute` — replay a fixed sequence           |
//! | [`random_walk`] | `RandomWalk` — seeded wander for soak-style tests   |
//! | [`error`]       | `StreamError` — the three positioning failure modes |

pub mod error;
pub mod fix;
pub mod random_walk;
pub mod scripted;
pub mod source;


pub use error::StreamError;
pub use fix::LocationFix;
pub use random_walk::RandomWalk;
pub use scripted::ScriptedRoute;
pub use source::FixSource;
