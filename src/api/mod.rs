// src/api/mod.rs

pub mod error;

pub use error::AppError;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::models::AppState;
use crate::services::{get_appointments_handler, set_appointment_handler};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/appointments",
            get(get_appointments_handler).post(set_appointment_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
