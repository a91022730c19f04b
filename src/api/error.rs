use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ApiError;
use crate::services::SchedulerError;

/// Everything a handler can fail with, mapped onto HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    Decode(#[from] JsonRejection),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // plain text, like a raw decoder error
            AppError::Decode(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
            }
            AppError::Scheduler(err) => {
                let status = match err {
                    SchedulerError::Conflict { .. } => StatusCode::CONFLICT,
                    SchedulerError::TimeOutOfRange => StatusCode::BAD_REQUEST,
                    SchedulerError::InvalidDuration => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, Json(ApiError::new(err.to_string()))).into_response()
            }
        }
    }
}
