use common::{
    DataKind, GrowthRecord, GrowthTable, LaunchScheduleDto, OutlookRow, RegionRateDto,
    RevenuePoint, RevenueTimeseries, ScenarioAssumptions, ScenarioOutlook, SchedulePoint,
    SegmentRateDto, StructureBreakdown, StructureSlice, YearRevenue, YearTable,
};
use model::Dataset;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Immutable projection inputs
    pub dataset: Arc<Dataset>,
    /// Cache for computed payloads
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Timeseries(RevenueTimeseries),
    Outlook(ScenarioOutlook),
}

/// Scenario selector shared by the projection endpoints
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ScenarioQuery {
    /// Scenario wire name: conservative, normal or optimistic (default: normal)
    pub scenario: Option<String>,
}

/// Query parameters for the regional ranking endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct YearTableQuery {
    /// Scenario wire name (default: normal)
    pub scenario: Option<String>,
    /// Year to rank (default: end of the forecast horizon)
    pub year: Option<i32>,
    /// Keep only the N largest regions
    #[validate(range(min = 1, max = 6))]
    pub top: Option<u64>,
}

/// Query parameters for the revenue mix endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct StructureQuery {
    /// Scenario wire name (default: normal)
    pub scenario: Option<String>,
    /// Year to break down (default: end of the forecast horizon)
    pub year: Option<i32>,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of regions in the model
    pub regions: usize,
    /// Number of segments in the model
    pub segments: usize,
    /// Covered year range, e.g. "2022-2030"
    pub coverage: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::scenarios::list_scenarios,
        crate::handlers::regions::get_all_regions_timeseries,
        crate::handlers::regions::get_region_timeseries,
        crate::handlers::regions::get_regional_growth,
        crate::handlers::regions::get_regional_year_table,
        crate::handlers::segments::get_all_segments_timeseries,
        crate::handlers::segments::get_segment_timeseries,
        crate::handlers::segments::get_segment_growth,
        crate::handlers::outlook::get_scenario_outlook,
        crate::handlers::outlook::get_structure_breakdown,
    ),
    components(
        schemas(
            ApiResponse<RevenueTimeseries>,
            ApiResponse<GrowthTable>,
            ApiResponse<YearTable>,
            ApiResponse<ScenarioOutlook>,
            ApiResponse<StructureBreakdown>,
            ApiResponse<Vec<ScenarioAssumptions>>,
            ErrorResponse,
            HealthResponse,
            ScenarioQuery,
            YearTableQuery,
            StructureQuery,
            RevenueTimeseries,
            RevenuePoint,
            DataKind,
            GrowthTable,
            GrowthRecord,
            YearTable,
            YearRevenue,
            ScenarioOutlook,
            OutlookRow,
            StructureBreakdown,
            StructureSlice,
            ScenarioAssumptions,
            RegionRateDto,
            SegmentRateDto,
            LaunchScheduleDto,
            SchedulePoint,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scenarios", description = "Scenario assumption endpoints"),
        (name = "regions", description = "Regional revenue projection endpoints"),
        (name = "segments", description = "Business segment projection endpoints"),
        (name = "outlook", description = "Company-wide outlook endpoints"),
    ),
    info(
        title = "Proforma API",
        description = "Scenario-based revenue projection API - regional and segment forecasts, growth rates and revenue mix",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
