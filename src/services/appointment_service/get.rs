use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

use crate::models::{ApiResponse, AppState};

/// `GET /appointments`: every committed appointment in booking order.
pub async fn get_appointments_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let appointments = state.scheduler.store().list_all().await;
    debug!(count = appointments.len(), "listing appointments");
    Json(ApiResponse::listing(appointments))
}
