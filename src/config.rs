use anyhow::Result;
use model::Dataset;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use crate::schemas::AppState;

/// Initialize application configuration and state
pub fn initialize_app_state() -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Build the projection inputs
    let dataset = Dataset::baseline();
    tracing::info!(
        "Loaded baseline dataset: actuals {}-{}, horizon through {}",
        dataset.start_year(),
        dataset.base_year(),
        dataset.end_year()
    );

    // Initialize cache
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    Ok(AppState {
        dataset: Arc::new(dataset),
        cache,
    })
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
