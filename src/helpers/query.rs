use crate::schemas::ErrorResponse;
use axum::http::StatusCode;
use axum::response::Json;
use compute::ComputeError;
use model::{Region, Scenario, Segment};
use tracing::error;

/// Error payload returned by the API endpoints.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build a 400 response with a typed error body.
pub fn bad_request(code: &str, message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Build a 500 response with a typed error body.
pub fn internal_error(message: impl Into<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
            success: false,
        }),
    )
}

/// Resolve the optional `scenario` query parameter, defaulting to the normal
/// scenario when absent.
pub fn resolve_scenario(raw: Option<&str>) -> Result<Scenario, ApiError> {
    match raw {
        None => Ok(Scenario::default()),
        Some(name) => name
            .parse::<Scenario>()
            .map_err(|e| bad_request("INVALID_SCENARIO", e.to_string())),
    }
}

/// Resolve a region path segment.
pub fn resolve_region(raw: &str) -> Result<Region, ApiError> {
    raw.parse::<Region>()
        .map_err(|e| bad_request("INVALID_REGION", e.to_string()))
}

/// Resolve a segment path segment.
pub fn resolve_segment(raw: &str) -> Result<Segment, ApiError> {
    raw.parse::<Segment>()
        .map_err(|e| bad_request("INVALID_SEGMENT", e.to_string()))
}

/// Map a compute error onto the matching HTTP response. Invalid input comes
/// back as 400 with a specific code; anything else is logged and surfaced as
/// a generic 500.
pub fn compute_error(err: ComputeError) -> ApiError {
    match &err {
        ComputeError::YearOutOfCoverage { .. } => bad_request("INVALID_YEAR", err.to_string()),
        _ if err.is_invalid_input() => bad_request("INVALID_INPUT", err.to_string()),
        _ => {
            error!("Computation failed: {}", err);
            internal_error("Computation failed")
        }
    }
}

/// Map a payload conversion failure onto a 500 response.
pub fn conversion_error(message: String) -> ApiError {
    error!("Response conversion failed: {}", message);
    internal_error("Failed to convert computed data")
}
