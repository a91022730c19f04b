pub mod response;

pub use response::{ApiError, ApiResponse, LIST_MESSAGE};
