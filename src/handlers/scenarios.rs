use crate::helpers::query::{ApiError, compute_error};
use crate::schemas::{ApiResponse, AppState};
use axum::{extract::State, response::Json};
use common::ScenarioAssumptions;
use tracing::instrument;

/// List the assumption sets behind every scenario
#[utoipa::path(
    get,
    path = "/api/v1/scenarios",
    tag = "scenarios",
    responses(
        (status = 200, description = "Scenario assumptions retrieved successfully", body = ApiResponse<Vec<ScenarioAssumptions>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn list_scenarios(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ScenarioAssumptions>>>, ApiError> {
    let sets =
        compute::assumptions::all_scenario_assumptions(&state.dataset).map_err(compute_error)?;

    let response = ApiResponse {
        data: sets,
        message: "Scenario assumptions retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
