//! `rally-meetup` — where a circle is rallying to, and where it rallied before.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`spot`]     | `MeetingSpot` — target coordinates, metadata, attendees   |
//! | [`event`]    | `EventListing` — an AI-suggested event, convertible to a spot |
//! | [`book`]     | `SpotBook` — per-circle active spot + archive             |
//! | [`travel`]   | `estimate_travel_minutes` — the shipped traffic heuristic |
//! | [`error`]    | `MeetupError`, `MeetupResult`                             |
//!
//! # Lifecycle
//!
//! A spot is born from a quick-mark ([`SpotBook::mark_here`]) or an accepted
//! suggestion ([`SpotBook::accept_event`]), lives as the circle's single
//! active spot, and dies into the archive ([`SpotBook::finish`]) where the
//! history and reporting views read it.  The book enforces the one-active-
//! spot-per-circle invariant structurally: the active slot is a map keyed by
//! circle.

pub mod book;
pub mod error;
pub mod event;
pub mod spot;
pub mod travel;

#[cfg(test)]
mod tests;

pub use book::SpotBook;
pub use error::{MeetupError, MeetupResult};
pub use event::EventListing;
pub use spot::MeetingSpot;
pub use travel::estimate_travel_minutes;
