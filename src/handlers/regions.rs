use crate::helpers::converters::convert_dataframe_to_timeseries;
use crate::helpers::query::{
    ApiError, compute_error, conversion_error, resolve_region, resolve_scenario,
};
use crate::schemas::{ApiResponse, AppState, CachedData, ScenarioQuery, YearTableQuery};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{GrowthTable, RevenueTimeseries, YearTable};
use model::Region;
use tracing::instrument;

/// Get revenue timeseries for all regions
#[utoipa::path(
    get,
    path = "/api/v1/regions/timeseries",
    tag = "regions",
    params(ScenarioQuery),
    responses(
        (status = 200, description = "Regional timeseries retrieved successfully", body = ApiResponse<RevenueTimeseries>),
        (status = 400, description = "Unknown scenario", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_all_regions_timeseries(
    Query(query): Query<ScenarioQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RevenueTimeseries>>, ApiError> {
    let scenario = resolve_scenario(query.scenario.as_deref())?;

    // Create cache key
    let cache_key = format!("regional_ts_{}", scenario);

    // Check cache first
    if let Some(CachedData::Timeseries(timeseries)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: timeseries,
            message: "Regional timeseries retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let df = compute::regional::regional_timeseries(&state.dataset, &Region::ALL, scenario)
        .map_err(compute_error)?;
    let timeseries = convert_dataframe_to_timeseries(df).map_err(conversion_error)?;

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Timeseries(timeseries.clone()))
        .await;

    let response = ApiResponse {
        data: timeseries,
        message: "Regional timeseries retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get revenue timeseries for a specific region
#[utoipa::path(
    get,
    path = "/api/v1/regions/{region}/timeseries",
    tag = "regions",
    params(
        ("region" = String, Path, description = "Region name, e.g. united-states"),
        ScenarioQuery,
    ),
    responses(
        (status = 200, description = "Region timeseries retrieved successfully", body = ApiResponse<RevenueTimeseries>),
        (status = 400, description = "Unknown region or scenario", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_region_timeseries(
    Path(region): Path<String>,
    Query(query): Query<ScenarioQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RevenueTimeseries>>, ApiError> {
    let region = resolve_region(&region)?;
    let scenario = resolve_scenario(query.scenario.as_deref())?;

    // Create cache key
    let cache_key = format!("region_ts_{}_{}", region, scenario);

    // Check cache first
    if let Some(CachedData::Timeseries(timeseries)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: timeseries,
            message: "Region timeseries retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let df = compute::regional::regional_timeseries(&state.dataset, &[region], scenario)
        .map_err(compute_error)?;
    let timeseries = convert_dataframe_to_timeseries(df).map_err(conversion_error)?;

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Timeseries(timeseries.clone()))
        .await;

    let response = ApiResponse {
        data: timeseries,
        message: "Region timeseries retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get compound annual growth rates per region
#[utoipa::path(
    get,
    path = "/api/v1/regions/growth",
    tag = "regions",
    params(ScenarioQuery),
    responses(
        (status = 200, description = "Regional growth retrieved successfully", body = ApiResponse<GrowthTable>),
        (status = 400, description = "Unknown scenario", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_regional_growth(
    Query(query): Query<ScenarioQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GrowthTable>>, ApiError> {
    let scenario = resolve_scenario(query.scenario.as_deref())?;

    let table =
        compute::regional::regional_growth(&state.dataset, scenario).map_err(compute_error)?;

    let response = ApiResponse {
        data: table,
        message: "Regional growth retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get a ranked regional revenue table for a single year
#[utoipa::path(
    get,
    path = "/api/v1/regions/table",
    tag = "regions",
    params(YearTableQuery),
    responses(
        (status = 200, description = "Regional year table retrieved successfully", body = ApiResponse<YearTable>),
        (status = 400, description = "Unknown scenario or year outside coverage", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_regional_year_table(
    Valid(Query(query)): Valid<Query<YearTableQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<YearTable>>, ApiError> {
    let scenario = resolve_scenario(query.scenario.as_deref())?;
    let year = query.year.unwrap_or_else(|| state.dataset.end_year());
    let top = query.top.map(|t| t as usize);

    let table = compute::regional::regional_year_table(&state.dataset, scenario, year, top)
        .map_err(compute_error)?;

    let response = ApiResponse {
        data: table,
        message: "Regional year table retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
