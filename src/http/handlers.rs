//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{ForecastQuery, HealthResponse, PipelineOutcome};
use super::error::AppError;
use super::state::AppState;
use crate::services::pipeline::run_forecast_pipeline;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and history is
/// loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        history_records: state.store.len(),
    }))
}

/// GET /v1/forecast
///
/// Run the full pipeline against the loaded history, adjusted by the
/// optional schedule query parameters.
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> HandlerResult<PipelineOutcome> {
    let params = query.into_params().map_err(AppError::BadRequest)?;

    // The pipeline is CPU-bound; keep it off the async worker threads.
    let outcome = tokio::task::spawn_blocking(move || {
        run_forecast_pipeline(
            state.store.as_ref(),
            state.predictor.as_ref(),
            &params,
            &state.settings,
        )
    })
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {}", e)))??;

    Ok(Json(outcome))
}
