use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use diag_core::api_types::{DiagnoseRequest, DiagnoseResponse, ErrorResponse};
use diag_core::diagnosis::DiagnosisEngine;

use crate::state::AppState;

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn diagnose(
    State(state): State<AppState>,
    payload: Result<Json<DiagnoseRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected malformed diagnosis request");
            return (rejection.status(), Json(ErrorResponse::new(rejection.body_text())))
                .into_response();
        }
    };

    if req.text.trim().is_empty() {
        warn!("Rejected diagnosis request with empty text");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("input text must not be empty")),
        )
            .into_response();
    }

    info!(chars = req.text.chars().count(), "Received diagnosis request");

    match state.engine.diagnose(&req.text) {
        Ok(report) => (StatusCode::OK, Json(DiagnoseResponse::from(report))).into_response(),
        Err(e) => {
            error!(error = %e, "Diagnosis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}
