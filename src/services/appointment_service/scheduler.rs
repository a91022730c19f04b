use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, FixedOffset};
use tracing::{info, warn};

use super::error::SchedulerError;
use crate::db::{AppointmentStore, Appointments};
use crate::models::{Appointment, CreateAppointmentRequest};

/// Default length of a booking when nothing else is configured.
pub const DEFAULT_APPOINTMENT_MINUTES: i64 = 30;

// RFC 3339 only has four-digit years
const MAX_YEAR: i32 = 9999;

/// Books appointments while keeping each barber's intervals disjoint.
#[derive(Debug, Clone)]
pub struct Scheduler {
    store: Arc<AppointmentStore>,
    duration: Duration,
}

impl Scheduler {
    pub fn new(store: Arc<AppointmentStore>, duration: Duration) -> Self {
        Scheduler { store, duration }
    }

    pub fn store(&self) -> Arc<AppointmentStore> {
        Arc::clone(&self.store)
    }

    /// Books the request using the configured duration.
    pub async fn book(&self, request: CreateAppointmentRequest) -> Result<Appointment, SchedulerError> {
        self.schedule_appointment(
            request.barber_id,
            request.customer_id,
            request.service_id,
            request.start_time,
            self.duration,
        )
        .await
    }

    /// Commits `[desired_start, desired_start + duration)` for `barber_id` unless it
    /// overlaps one of that barber's appointments. The availability check and the
    /// append run under one store lock, so concurrent callers cannot both win the
    /// same slot. On error the store is left untouched.
    pub async fn schedule_appointment(
        &self,
        barber_id: i64,
        customer_id: i64,
        service_id: i64,
        desired_start: DateTime<FixedOffset>,
        duration: Duration,
    ) -> Result<Appointment, SchedulerError> {
        let desired_end = appointment_end(desired_start, duration)?;

        let mut appointments = self.store.lock().await;

        if !is_available(&appointments, barber_id, desired_start, desired_end) {
            warn!(
                barber_id,
                customer_id,
                requested_start = %desired_start,
                requested_end = %desired_end,
                "barber unavailable"
            );
            return Err(SchedulerError::Conflict { barber_id });
        }

        let appointment = Appointment {
            barber_id,
            customer_id,
            service_id,
            start_time: desired_start,
            end_time: desired_end,
        };
        appointments.append(appointment.clone());

        info!(
            barber_id,
            customer_id,
            service_id,
            start = %appointment.start_time,
            end = %appointment.end_time,
            "appointment booked"
        );
        Ok(appointment)
    }
}

/// `desired_start + duration`, kept within what an RFC 3339 timestamp can carry.
pub fn appointment_end(
    desired_start: DateTime<FixedOffset>,
    duration: Duration,
) -> Result<DateTime<FixedOffset>, SchedulerError> {
    if duration <= Duration::zero() {
        return Err(SchedulerError::InvalidDuration);
    }
    desired_start
        .checked_add_signed(duration)
        .filter(|end| end.year() <= MAX_YEAR)
        .ok_or(SchedulerError::TimeOutOfRange)
}

/// First appointment of `barber_id`, in insertion order, overlapping `[desired_start, desired_end)`.
pub fn find_conflict(
    appointments: &Appointments,
    barber_id: i64,
    desired_start: DateTime<FixedOffset>,
    desired_end: DateTime<FixedOffset>,
) -> Option<&Appointment> {
    appointments
        .for_barber(barber_id)
        .find(|existing| existing.overlaps(desired_start, desired_end))
}

pub fn is_available(
    appointments: &Appointments,
    barber_id: i64,
    desired_start: DateTime<FixedOffset>,
    desired_end: DateTime<FixedOffset>,
) -> bool {
    find_conflict(appointments, barber_id, desired_start, desired_end).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::appointment_service::error::CONFLICT_MESSAGE;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn scheduler() -> Scheduler {
        Scheduler::new(
            Arc::new(AppointmentStore::new()),
            Duration::minutes(DEFAULT_APPOINTMENT_MINUTES),
        )
    }

    #[tokio::test]
    async fn end_time_is_start_plus_duration() {
        let scheduler = scheduler();
        let booked = scheduler
            .schedule_appointment(1, 2, 3, at("2024-05-01T10:00:00Z"), Duration::minutes(45))
            .await
            .unwrap();
        assert_eq!(booked.end_time, at("2024-05-01T10:45:00Z"));
        assert_eq!(scheduler.store().list_all().await, vec![booked]);
    }

    #[tokio::test]
    async fn conflict_leaves_store_untouched() {
        let scheduler = scheduler();
        let thirty = Duration::minutes(30);
        scheduler
            .schedule_appointment(1, 2, 3, at("2024-05-01T10:00:00Z"), thirty)
            .await
            .unwrap();

        let err = scheduler
            .schedule_appointment(1, 9, 9, at("2024-05-01T10:29:00Z"), thirty)
            .await
            .unwrap_err();
        assert_eq!(err, SchedulerError::Conflict { barber_id: 1 });
        assert_eq!(err.to_string(), CONFLICT_MESSAGE);
        assert_eq!(scheduler.store().len().await, 1);
    }

    #[tokio::test]
    async fn non_positive_duration_is_rejected() {
        let scheduler = scheduler();
        for duration in [Duration::zero(), Duration::minutes(-5)] {
            let err = scheduler
                .schedule_appointment(1, 2, 3, at("2024-05-01T10:00:00Z"), duration)
                .await
                .unwrap_err();
            assert_eq!(err, SchedulerError::InvalidDuration);
        }
        assert!(scheduler.store().is_empty().await);
    }

    #[tokio::test]
    async fn unrepresentable_end_is_out_of_range() {
        let scheduler = scheduler();
        let late = at("9999-12-31T23:50:00Z");
        for duration in [Duration::MAX, Duration::minutes(30)] {
            let err = scheduler
                .schedule_appointment(1, 1, 1, late, duration)
                .await
                .unwrap_err();
            assert_eq!(err, SchedulerError::TimeOutOfRange);
        }
        assert!(scheduler.store().is_empty().await);

        // the last slot that still ends inside year 9999
        let booked = scheduler
            .schedule_appointment(1, 1, 1, at("9999-12-31T23:00:00Z"), Duration::minutes(30))
            .await
            .unwrap();
        let json = serde_json::to_string(&booked).unwrap();
        let parsed: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, booked);
    }

    #[tokio::test]
    async fn book_uses_configured_duration() {
        let scheduler = Scheduler::new(Arc::new(AppointmentStore::new()), Duration::minutes(50));
        let request = CreateAppointmentRequest {
            barber_id: 4,
            customer_id: 5,
            service_id: 6,
            start_time: at("2024-05-01T10:00:00+02:00"),
            end_time: Some(at("2030-01-01T00:00:00Z")),
        };
        let booked = scheduler.book(request).await.unwrap();
        assert_eq!(booked.end_time, at("2024-05-01T10:50:00+02:00"));
    }

    #[tokio::test]
    async fn find_conflict_returns_first_in_insertion_order() {
        let store = AppointmentStore::new();
        let first = Appointment {
            barber_id: 1,
            customer_id: 10,
            service_id: 1,
            start_time: at("2024-05-01T10:30:00Z"),
            end_time: at("2024-05-01T11:00:00Z"),
        };
        let second = Appointment {
            customer_id: 11,
            start_time: at("2024-05-01T10:00:00Z"),
            end_time: at("2024-05-01T10:30:00Z"),
            ..first.clone()
        };
        store.append(first).await;
        store.append(second).await;

        let guard = store.lock().await;
        let hit = find_conflict(&guard, 1, at("2024-05-01T10:00:00Z"), at("2024-05-01T11:00:00Z"));
        assert_eq!(hit.map(|a| a.customer_id), Some(10));
        assert!(!is_available(&guard, 1, at("2024-05-01T10:00:00Z"), at("2024-05-01T11:00:00Z")));
        assert!(is_available(&guard, 2, at("2024-05-01T10:00:00Z"), at("2024-05-01T11:00:00Z")));
    }
}
