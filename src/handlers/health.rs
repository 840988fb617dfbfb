use axum::{extract::State, response::Json};
use model::{Region, Segment};
use tracing::instrument;
use crate::helpers::query::ApiError;
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        regions: Region::ALL.len(),
        segments: Segment::ALL.len(),
        coverage: format!(
            "{}-{}",
            state.dataset.start_year(),
            state.dataset.end_year()
        ),
    };

    Ok(Json(response))
}
