use thiserror::Error;

pub const CONFLICT_MESSAGE: &str = "the barber is not available at the desired time";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The requested interval overlaps an existing booking of the same barber.
    #[error("{}", CONFLICT_MESSAGE)]
    Conflict { barber_id: i64 },

    #[error("the requested time is out of range")]
    TimeOutOfRange,

    #[error("appointment duration must be positive")]
    InvalidDuration,
}
