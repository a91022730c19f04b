pub mod error;
pub mod get;
pub mod scheduler;
pub mod set;

pub use error::{SchedulerError, CONFLICT_MESSAGE};
pub use get::get_appointments_handler;
pub use scheduler::{
    appointment_end, find_conflict, is_available, Scheduler, DEFAULT_APPOINTMENT_MINUTES,
};
pub use set::set_appointment_handler;
