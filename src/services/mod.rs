pub mod appointment_service;

pub use appointment_service::{
    get_appointments_handler, set_appointment_handler, Scheduler, SchedulerError,
};
