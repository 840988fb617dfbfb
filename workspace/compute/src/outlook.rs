//! Whole-company outlook: per-year totals and the revenue mix.

use crate::error::{ComputeError, Result};
use crate::growth::cagr;
use crate::rounding::round1;
use crate::segments;
use common::{OutlookRow, ScenarioOutlook, StructureBreakdown, StructureSlice};
use model::{Dataset, Scenario, Segment, SegmentKind, Year, YearValue};
use rust_decimal::Decimal;
use tracing::debug;

/// Year-by-year revenue outlook across all segments.
///
/// Each row carries the established and emerging subtotals, their sum, and
/// the total's change against the previous covered year. The total is always
/// computed as the sum of its parts, never carried separately.
pub fn scenario_outlook(dataset: &Dataset, scenario: Scenario) -> Result<ScenarioOutlook> {
    debug!("Building outlook under the {} scenario", scenario);

    let series = all_segment_series(dataset, scenario)?;

    let mut rows = Vec::new();
    let mut previous_total: Option<Decimal> = None;
    for year in dataset.coverage_years() {
        let mut established = Decimal::ZERO;
        let mut emerging = Decimal::ZERO;
        for (segment, points) in &series {
            let value = value_at(points, *segment, year)?;
            match segment.kind() {
                SegmentKind::Established => established += value,
                SegmentKind::Emerging => emerging += value,
            }
        }
        let total = established + emerging;

        let yoy_pct = match previous_total {
            Some(previous) if previous > Decimal::ZERO => {
                let change = total.checked_div(previous).ok_or_else(|| {
                    ComputeError::Decimal("year-over-year ratio overflowed".to_string())
                })?;
                Some(round1((change - Decimal::ONE) * Decimal::ONE_HUNDRED))
            }
            _ => None,
        };
        previous_total = Some(total);

        rows.push(OutlookRow {
            year,
            established,
            emerging,
            total,
            yoy_pct,
        });
    }

    Ok(ScenarioOutlook::new(scenario.as_str().to_string(), rows))
}

/// Revenue mix across all segments for a single covered year.
///
/// Shares are computed from exact values and rounded to one decimal place.
/// Per-segment CAGR spans the base year to the target year, so it is only
/// defined for forecast years and for segments with base-year revenue.
pub fn structure_breakdown(
    dataset: &Dataset,
    scenario: Scenario,
    year: Year,
) -> Result<StructureBreakdown> {
    if !dataset.covers(year) {
        return Err(ComputeError::YearOutOfCoverage {
            year,
            start: dataset.start_year(),
            end: dataset.end_year(),
        });
    }

    let base_year = dataset.base_year();
    let span = year - base_year;
    let series = all_segment_series(dataset, scenario)?;

    let mut total = Decimal::ZERO;
    let mut segment_values = Vec::with_capacity(series.len());
    for (segment, points) in &series {
        let value = value_at(points, *segment, year)?;
        total += value;
        segment_values.push((*segment, value));
    }

    let mut base_total = Decimal::ZERO;
    let mut slices = Vec::with_capacity(segment_values.len());
    for (segment, value) in segment_values {
        let base_value = dataset.segment_actual(segment, base_year).ok_or_else(|| {
            ComputeError::MissingData(format!(
                "actual for segment {} in base year {}",
                segment, base_year
            ))
        })?;
        base_total += base_value;

        let share_pct = if total > Decimal::ZERO {
            let share = value.checked_div(total).ok_or_else(|| {
                ComputeError::Decimal("revenue share overflowed".to_string())
            })?;
            round1(share * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };

        let cagr_pct = if span > 0 && base_value > Decimal::ZERO {
            Some(cagr(base_value, value, span)?)
        } else {
            None
        };

        slices.push(StructureSlice {
            segment: segment.as_str().to_string(),
            revenue: value,
            share_pct,
            cagr_pct,
        });
    }

    let total_cagr_pct = if span > 0 && base_total > Decimal::ZERO {
        Some(cagr(base_total, total, span)?)
    } else {
        None
    };

    Ok(StructureBreakdown {
        scenario: scenario.as_str().to_string(),
        year,
        total_revenue: total,
        total_cagr_pct,
        slices,
    })
}

fn all_segment_series(
    dataset: &Dataset,
    scenario: Scenario,
) -> Result<Vec<(Segment, Vec<YearValue>)>> {
    Segment::ALL
        .into_iter()
        .map(|segment| Ok((segment, segments::complete_series(dataset, segment, scenario)?)))
        .collect()
}

fn value_at(points: &[YearValue], segment: Segment, year: Year) -> Result<Decimal> {
    points
        .iter()
        .find(|point| point.year == year)
        .map(|point| point.value)
        .ok_or_else(|| {
            ComputeError::MissingData(format!("value for segment {} in {}", segment, year))
        })
}
