use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Service description
        .route("/", get(handlers::index::service_info))
        // Health
        .route("/api/health", get(handlers::health::health_check))
        // Diagnosis
        .route("/api/diagnose", post(handlers::diagnose::diagnose))
}
