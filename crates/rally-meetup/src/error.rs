use rally_core::{CircleId, SpotId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeetupError {
    #[error("circle {0} has no active meeting spot")]
    NoActiveSpot(CircleId),

    #[error("meeting spot {0} is not in the archive")]
    SpotNotFound(SpotId),
}

pub type MeetupResult<T> = Result<T, MeetupError>;
