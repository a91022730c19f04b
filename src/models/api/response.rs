use serde::{Deserialize, Serialize};

use crate::models::Appointment;

pub const LIST_MESSAGE: &str = "appointment list retrieved successfully";

// Body of GET /appointments
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<Appointment>,
}

impl ApiResponse {
    pub fn listing(data: Vec<Appointment>) -> Self {
        ApiResponse {
            success: true,
            message: LIST_MESSAGE.to_string(),
            data,
        }
    }
}

// Structured error body, e.g. a 409 on a booking conflict
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: bool,
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        ApiError {
            error: true,
            message: message.into(),
        }
    }
}
