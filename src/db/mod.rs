//! In-memory appointment store.
//!
//! Holds every appointment committed since process start, in insertion
//! order. Nothing is ever removed or updated. All access goes through a
//! single mutex so a caller holding [`AppointmentStore::lock`] can check
//! availability and append without another booking slipping in between.

use tokio::sync::{Mutex, MutexGuard};

use crate::models::Appointment;

#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Mutex<Appointments>,
}

/// The ordered sequence behind the store's lock.
#[derive(Debug, Default)]
pub struct Appointments {
    items: Vec<Appointment>,
}

impl Appointments {
    pub fn append(&mut self, appointment: Appointment) {
        self.items.push(appointment);
    }

    pub fn for_barber(&self, barber_id: i64) -> impl Iterator<Item = &Appointment> {
        self.items.iter().filter(move |a| a.barber_id == barber_id)
    }

    pub fn list_all(&self) -> Vec<Appointment> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusive access to the sequence for a check-then-append critical section.
    pub async fn lock(&self) -> MutexGuard<'_, Appointments> {
        self.appointments.lock().await
    }

    pub async fn append(&self, appointment: Appointment) {
        self.lock().await.append(appointment);
    }

    /// Snapshot of every stored appointment in insertion order.
    pub async fn list_all(&self) -> Vec<Appointment> {
        self.lock().await.list_all()
    }

    pub async fn len(&self) -> usize {
        self.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.lock().await.is_empty()
    }
}
