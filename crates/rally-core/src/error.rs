//! Toolkit error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `RallyError` via `From` impls, or keep them separate and wrap `RallyError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::{CircleId, MemberId};

/// The top-level error type for `rally-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RallyError {
    #[error("member {0} not found")]
    MemberNotFound(MemberId),

    #[error("circle {0} not found")]
    CircleNotFound(CircleId),

    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for all `rally-*` crates.
pub type RallyResult<T> = Result<T, RallyError>;
