use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::warn;

use crate::api::AppError;
use crate::models::{Appointment, AppState, CreateAppointmentRequest};

/// `POST /appointments`: books a slot of the configured length starting at `start_time`.
pub async fn set_appointment_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let Json(request) = payload.inspect_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected appointment request body");
    })?;

    let appointment = state.scheduler.book(request).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}
