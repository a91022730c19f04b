pub mod appointment;

pub use appointment::{Appointment, CreateAppointmentRequest};
