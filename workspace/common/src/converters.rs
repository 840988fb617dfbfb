//! Converter functions for bridging compute and common modules
//!
//! The compute module emits long-format DataFrames whose value column holds
//! decimal strings. These helpers parse raw rows back into the transport
//! structures without this crate depending on polars directly.

use crate::timeseries::{DataKind, RevenuePoint, RevenueTimeseries};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Build a single [`RevenuePoint`] from raw row data.
pub fn create_revenue_point(
    entity: &str,
    year: i32,
    value_str: &str,
    kind_str: &str,
) -> Result<RevenuePoint, String> {
    let value = Decimal::from_str(value_str)
        .map_err(|e| format!("Failed to parse value '{}': {}", value_str, e))?;
    let kind = DataKind::from_str(kind_str)?;

    Ok(RevenuePoint::new(entity.to_string(), year, value, kind))
}

/// Build multiple [`RevenuePoint`]s from raw row data, failing on the first
/// malformed row.
pub fn create_revenue_points(
    data: Vec<(String, i32, String, String)>,
) -> Result<Vec<RevenuePoint>, String> {
    data.into_iter()
        .map(|(entity, year, value_str, kind_str)| {
            create_revenue_point(&entity, year, &value_str, &kind_str)
        })
        .collect()
}

/// Flatten a timeseries back into raw rows for external consumers.
pub fn timeseries_to_raw_data(
    timeseries: &RevenueTimeseries,
) -> Vec<(String, i32, String, String)> {
    timeseries
        .points
        .iter()
        .map(|point| {
            (
                point.entity.clone(),
                point.year,
                point.value.to_string(),
                point.kind.to_string(),
            )
        })
        .collect()
}
