use crate::handlers::{
    health::health_check,
    outlook::{get_scenario_outlook, get_structure_breakdown},
    regions::{
        get_all_regions_timeseries, get_region_timeseries, get_regional_growth,
        get_regional_year_table,
    },
    scenarios::list_scenarios,
    segments::{get_all_segments_timeseries, get_segment_growth, get_segment_timeseries},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    #[cfg(not(test))]
    let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();

    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Scenario assumptions
        .route("/api/v1/scenarios", get(list_scenarios))
        // Regional projection routes
        .route("/api/v1/regions/timeseries", get(get_all_regions_timeseries))
        .route("/api/v1/regions/growth", get(get_regional_growth))
        .route("/api/v1/regions/table", get(get_regional_year_table))
        .route("/api/v1/regions/:region/timeseries", get(get_region_timeseries))
        // Segment projection routes
        .route("/api/v1/segments/timeseries", get(get_all_segments_timeseries))
        .route("/api/v1/segments/growth", get(get_segment_growth))
        .route("/api/v1/segments/:segment/timeseries", get(get_segment_timeseries))
        // Outlook routes
        .route("/api/v1/outlook", get(get_scenario_outlook))
        .route("/api/v1/outlook/structure", get(get_structure_breakdown))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Prometheus metrics are disabled in test builds to avoid recorder
    // conflicts between parallel test servers
    #[cfg(not(test))]
    let router = router
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer);

    router
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
