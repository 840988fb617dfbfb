use crate::helpers::converters::convert_dataframe_to_timeseries;
use crate::helpers::query::{
    ApiError, compute_error, conversion_error, resolve_scenario, resolve_segment,
};
use crate::schemas::{ApiResponse, AppState, CachedData, ScenarioQuery};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use common::{GrowthTable, RevenueTimeseries};
use model::Segment;
use tracing::instrument;

/// Get revenue timeseries for all business segments
#[utoipa::path(
    get,
    path = "/api/v1/segments/timeseries",
    tag = "segments",
    params(ScenarioQuery),
    responses(
        (status = 200, description = "Segment timeseries retrieved successfully", body = ApiResponse<RevenueTimeseries>),
        (status = 400, description = "Unknown scenario", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_all_segments_timeseries(
    Query(query): Query<ScenarioQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RevenueTimeseries>>, ApiError> {
    let scenario = resolve_scenario(query.scenario.as_deref())?;

    // Create cache key
    let cache_key = format!("segment_ts_all_{}", scenario);

    // Check cache first
    if let Some(CachedData::Timeseries(timeseries)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: timeseries,
            message: "Segment timeseries retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let df = compute::segments::segment_timeseries(&state.dataset, &Segment::ALL, scenario)
        .map_err(compute_error)?;
    let timeseries = convert_dataframe_to_timeseries(df).map_err(conversion_error)?;

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Timeseries(timeseries.clone()))
        .await;

    let response = ApiResponse {
        data: timeseries,
        message: "Segment timeseries retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get revenue timeseries for a specific business segment
#[utoipa::path(
    get,
    path = "/api/v1/segments/{segment}/timeseries",
    tag = "segments",
    params(
        ("segment" = String, Path, description = "Segment name, e.g. automotive"),
        ScenarioQuery,
    ),
    responses(
        (status = 200, description = "Segment timeseries retrieved successfully", body = ApiResponse<RevenueTimeseries>),
        (status = 400, description = "Unknown segment or scenario", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_segment_timeseries(
    Path(segment): Path<String>,
    Query(query): Query<ScenarioQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RevenueTimeseries>>, ApiError> {
    let segment = resolve_segment(&segment)?;
    let scenario = resolve_scenario(query.scenario.as_deref())?;

    // Create cache key
    let cache_key = format!("segment_ts_{}_{}", segment, scenario);

    // Check cache first
    if let Some(CachedData::Timeseries(timeseries)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: timeseries,
            message: "Segment timeseries retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let df = compute::segments::segment_timeseries(&state.dataset, &[segment], scenario)
        .map_err(compute_error)?;
    let timeseries = convert_dataframe_to_timeseries(df).map_err(conversion_error)?;

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Timeseries(timeseries.clone()))
        .await;

    let response = ApiResponse {
        data: timeseries,
        message: "Segment timeseries retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get compound annual growth rates per business segment
#[utoipa::path(
    get,
    path = "/api/v1/segments/growth",
    tag = "segments",
    params(ScenarioQuery),
    responses(
        (status = 200, description = "Segment growth retrieved successfully", body = ApiResponse<GrowthTable>),
        (status = 400, description = "Unknown scenario", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_segment_growth(
    Query(query): Query<ScenarioQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GrowthTable>>, ApiError> {
    let scenario = resolve_scenario(query.scenario.as_deref())?;

    let table =
        compute::segments::segment_growth(&state.dataset, scenario).map_err(compute_error)?;

    let response = ApiResponse {
        data: table,
        message: "Segment growth retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
