use crate::helpers::query::{ApiError, compute_error, resolve_scenario};
use crate::schemas::{ApiResponse, AppState, CachedData, ScenarioQuery, StructureQuery};
use axum::{
    extract::{Query, State},
    response::Json,
};
use common::{ScenarioOutlook, StructureBreakdown};
use tracing::instrument;

/// Get the full revenue outlook for a scenario
#[utoipa::path(
    get,
    path = "/api/v1/outlook",
    tag = "outlook",
    params(ScenarioQuery),
    responses(
        (status = 200, description = "Scenario outlook retrieved successfully", body = ApiResponse<ScenarioOutlook>),
        (status = 400, description = "Unknown scenario", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_scenario_outlook(
    Query(query): Query<ScenarioQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ScenarioOutlook>>, ApiError> {
    let scenario = resolve_scenario(query.scenario.as_deref())?;

    // Create cache key
    let cache_key = format!("outlook_{}", scenario);

    // Check cache first
    if let Some(CachedData::Outlook(outlook)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: outlook,
            message: "Scenario outlook retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let outlook =
        compute::outlook::scenario_outlook(&state.dataset, scenario).map_err(compute_error)?;

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Outlook(outlook.clone()))
        .await;

    let response = ApiResponse {
        data: outlook,
        message: "Scenario outlook retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get the segment revenue structure for a single year
#[utoipa::path(
    get,
    path = "/api/v1/outlook/structure",
    tag = "outlook",
    params(StructureQuery),
    responses(
        (status = 200, description = "Structure breakdown retrieved successfully", body = ApiResponse<StructureBreakdown>),
        (status = 400, description = "Unknown scenario or year outside coverage", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_structure_breakdown(
    Query(query): Query<StructureQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StructureBreakdown>>, ApiError> {
    let scenario = resolve_scenario(query.scenario.as_deref())?;
    let year = query.year.unwrap_or_else(|| state.dataset.end_year());

    let breakdown = compute::outlook::structure_breakdown(&state.dataset, scenario, year)
        .map_err(compute_error)?;

    let response = ApiResponse {
        data: breakdown,
        message: "Structure breakdown retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
