use common::{RevenueTimeseries, create_revenue_point};
use compute::reshape::{ENTITY_COL, KIND_COL, VALUE_COL, YEAR_COL};
use polars::prelude::AnyValue;

/// Helper function to convert a long frame to a RevenueTimeseries
pub fn convert_dataframe_to_timeseries(
    df: polars::prelude::DataFrame,
) -> Result<RevenueTimeseries, String> {
    // Extract columns from DataFrame
    let entity_col = df
        .column(ENTITY_COL)
        .map_err(|e| format!("Missing entity column: {}", e))?;
    let year_col = df
        .column(YEAR_COL)
        .map_err(|e| format!("Missing year column: {}", e))?;
    let value_col = df
        .column(VALUE_COL)
        .map_err(|e| format!("Missing value column: {}", e))?;
    let kind_col = df
        .column(KIND_COL)
        .map_err(|e| format!("Missing kind column: {}", e))?;

    let mut points = Vec::new();

    // Iterate through rows and create RevenuePoint objects
    for i in 0..df.height() {
        let entity = match entity_col
            .get(i)
            .map_err(|e| format!("Error getting entity at row {}: {}", i, e))?
        {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => format!("{}", other),
        };

        let year = year_col
            .get(i)
            .map_err(|e| format!("Error getting year at row {}: {}", i, e))?
            .try_extract::<i32>()
            .map_err(|e| format!("Error extracting year as i32 at row {}: {}", i, e))?;

        let value_str = match value_col
            .get(i)
            .map_err(|e| format!("Error getting value at row {}: {}", i, e))?
        {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => format!("{}", other),
        };

        let kind_str = match kind_col
            .get(i)
            .map_err(|e| format!("Error getting kind at row {}: {}", i, e))?
        {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => format!("{}", other),
        };

        let point = create_revenue_point(&entity, year, &value_str, &kind_str)
            .map_err(|e| format!("Error building point at row {}: {}", i, e))?;
        points.push(point);
    }

    Ok(RevenueTimeseries::new(points))
}
