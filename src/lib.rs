//! Appointment booking service for a barbershop.
//!
//! Bookings for the same barber never overlap: the scheduler checks the
//! in-memory store and appends under a single lock.

pub mod api;
pub mod db;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::Router;

use db::AppointmentStore;
use models::AppState;
use services::Scheduler;
use utils::AppConfig;

/// Builds the full application router with a fresh, empty store.
pub fn app(config: &AppConfig) -> Router {
    let store = Arc::new(AppointmentStore::new());
    let scheduler = Scheduler::new(store, config.appointment_duration);
    api::router(Arc::new(AppState::new(scheduler)))
}
