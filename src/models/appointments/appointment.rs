use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A committed booking of a barber over the half-open interval
/// `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub barber_id: i64,
    pub customer_id: i64,
    pub service_id: i64,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

impl Appointment {
    /// Half-open overlap test against `[start, end)`. Touching endpoints do not overlap.
    pub fn overlaps(&self, start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> bool {
        start < self.end_time && end > self.start_time
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointmentRequest {
    pub barber_id: i64,
    pub customer_id: i64,
    pub service_id: i64,
    pub start_time: DateTime<FixedOffset>,
    // accepted for symmetry with the response shape, never used for booking
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
}
