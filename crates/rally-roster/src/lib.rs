//! `rally-roster` — who is in which circle, where they are, and who arrived.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`member`]   | `Member`, `MemberStatus` — one person's state           |
//! | [`circle`]   | `FriendCircle` — a named group and its member list      |
//! | [`roster`]   | `CircleRoster` — owning store for members and circles   |
//! | [`chat`]     | `ChatMessage`, `ChatLog` — member-to-member messages    |
//!
//! # The arrival latch
//!
//! Arrival is sticky: [`CircleRoster::mark_arrived`] flips a member to
//! `Arrived` and stamps the arrival time exactly once; later samples — even
//! ones that put the member back outside the threshold — never revert it.
//! The latch resets only at the session boundary, when a circle rallies
//! toward a *new* meeting spot ([`CircleRoster::reset_arrivals`]).

pub mod chat;
pub mod circle;
pub mod member;
pub mod roster;

#[cfg(test)]
mod tests;

pub use chat::{ChatLog, ChatMessage};
pub use circle::FriendCircle;
pub use member::{Member, MemberStatus};
pub use roster::CircleRoster;
