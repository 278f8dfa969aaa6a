//! `rally-radar` — the radar-disc projection for the rallypoint toolkit.
//!
//! Everything in this crate is pure math over plain values: given a meeting
//! spot, a radar configuration, and the located members of a circle, it
//! answers *who is in range, where does each one sit on the disc, and who is
//! close enough to count as arrived*.  No state, no clocks, no I/O — the
//! fix-driven loop in `rally-tracker` calls [`project`] on every location
//! sample and owns all mutation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`config`]    | `RadarConfig` — the three tunables and their defaults |
//! | [`project`]   | `Blip`, `bearing_proxy`, `project`                  |

pub mod config;
pub mod project;

#[cfg(test)]
mod tests;

pub use config::RadarConfig;
pub use project::{bearing_proxy, project, Blip};
