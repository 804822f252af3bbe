use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::debug;

use diag_core::api_types::HealthResponse;

use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");

    let response = HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        knowledge: state.engine.knowledge_counts(),
        lexicon_terms: state.engine.lexicon_terms(),
    };

    (StatusCode::OK, Json(response))
}
