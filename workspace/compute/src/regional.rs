//! Regional revenue views: projection, long timeseries, growth, rankings.

use crate::error::{ComputeError, Result};
use crate::growth::cagr;
use crate::projector::{RatePolicy, project};
use crate::reshape::{SeriesBlock, long_frame};
use common::{DataKind, GrowthRecord, GrowthTable, YearRevenue, YearTable};
use model::{Dataset, Region, Scenario, Year, YearValue};
use polars::prelude::DataFrame;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Projects one region across the forecast horizon.
///
/// The projection is anchored at the region's base-year actual and compounds
/// by the scenario's assumption, with the first forecast year and the outer
/// years carrying their own rates.
pub fn project_region(
    dataset: &Dataset,
    region: Region,
    scenario: Scenario,
) -> Result<Vec<YearValue>> {
    let base = dataset
        .regional_actual(region, dataset.base_year())
        .ok_or_else(|| {
            ComputeError::MissingData(format!(
                "actual for region {} in base year {}",
                region,
                dataset.base_year()
            ))
        })?;
    let assumption = dataset.region_assumption(scenario, region).ok_or_else(|| {
        ComputeError::MissingData(format!("{} assumption for region {}", scenario, region))
    })?;

    let years = dataset.forecast_years();
    let mut rates = BTreeMap::new();
    for (offset, &year) in years.iter().enumerate() {
        let rate = if offset == 0 {
            assumption.first_year_rate
        } else {
            assumption.outer_years_rate
        };
        rates.insert(year, rate);
    }

    project(base, &years, &RatePolicy::PerYear(rates))
}

/// Historical actuals plus the projected horizon for the given regions,
/// melted into one long frame.
pub fn regional_timeseries(
    dataset: &Dataset,
    regions: &[Region],
    scenario: Scenario,
) -> Result<DataFrame> {
    debug!(
        "Building timeseries for {} regions under the {} scenario",
        regions.len(),
        scenario
    );

    let mut blocks = Vec::with_capacity(regions.len());
    for &region in regions {
        blocks.push(SeriesBlock::new(
            region.as_str(),
            complete_series(dataset, region, scenario)?,
        ));
    }

    long_frame(&blocks, dataset.base_year())
}

/// Base-year to end-of-horizon growth for every region.
pub fn regional_growth(dataset: &Dataset, scenario: Scenario) -> Result<GrowthTable> {
    let start_year = dataset.base_year();
    let end_year = dataset.end_year();
    let span = end_year - start_year;

    let mut records = Vec::with_capacity(Region::ALL.len());
    for region in Region::ALL {
        let start_value = dataset.regional_actual(region, start_year).ok_or_else(|| {
            ComputeError::MissingData(format!("actual for region {} in {}", region, start_year))
        })?;
        let end_value = project_region(dataset, region, scenario)?
            .last()
            .map(|point| point.value)
            .ok_or_else(|| {
                ComputeError::MissingData(format!("projection for region {}", region))
            })?;

        let cagr_pct = if start_value > Decimal::ZERO {
            Some(cagr(start_value, end_value, span)?)
        } else {
            None
        };

        records.push(GrowthRecord {
            entity: region.as_str().to_string(),
            start_year,
            start_value,
            end_year,
            end_value,
            cagr_pct,
        });
    }

    Ok(GrowthTable::new(scenario.as_str().to_string(), records))
}

/// Revenue of every region in a single year, ranked largest first.
///
/// `top` truncates the ranking after sorting. A year outside the covered
/// range is rejected instead of producing an empty table.
pub fn regional_year_table(
    dataset: &Dataset,
    scenario: Scenario,
    year: Year,
    top: Option<usize>,
) -> Result<YearTable> {
    if !dataset.covers(year) {
        return Err(ComputeError::YearOutOfCoverage {
            year,
            start: dataset.start_year(),
            end: dataset.end_year(),
        });
    }

    let mut rows = Vec::with_capacity(Region::ALL.len());
    for region in Region::ALL {
        let value = if dataset.is_historical(year) {
            dataset.regional_actual(region, year).ok_or_else(|| {
                ComputeError::MissingData(format!("actual for region {} in {}", region, year))
            })?
        } else {
            project_region(dataset, region, scenario)?
                .into_iter()
                .find(|point| point.year == year)
                .map(|point| point.value)
                .ok_or_else(|| {
                    ComputeError::MissingData(format!(
                        "projection for region {} in {}",
                        region, year
                    ))
                })?
        };
        rows.push(YearRevenue {
            entity: region.as_str().to_string(),
            value,
        });
    }

    rows.sort_by(|a, b| b.value.cmp(&a.value));
    if let Some(limit) = top {
        rows.truncate(limit);
    }

    let kind = if dataset.is_historical(year) {
        DataKind::Historical
    } else {
        DataKind::Forecast
    };
    Ok(YearTable::new(scenario.as_str().to_string(), year, kind, rows))
}

fn complete_series(
    dataset: &Dataset,
    region: Region,
    scenario: Scenario,
) -> Result<Vec<YearValue>> {
    let mut points = dataset
        .regional_actuals(region)
        .ok_or_else(|| ComputeError::MissingData(format!("actuals for region {}", region)))?
        .to_vec();
    points.extend(project_region(dataset, region, scenario)?);
    Ok(points)
}
