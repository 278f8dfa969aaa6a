use rally_core::{CircleId, MemberId, RallyError};
use rally_meetup::MeetupError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("tracker configuration error: {0}")]
    Config(String),

    #[error("device member {member} is not in circle {circle}")]
    DeviceMemberNotInCircle { member: MemberId, circle: CircleId },

    #[error("member {0} has no known location")]
    NoKnownLocation(MemberId),

    #[error(transparent)]
    Roster(#[from] RallyError),

    #[error(transparent)]
    Meetup(#[from] MeetupError),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
