//! Business segment views: projection, long timeseries, growth.
//!
//! Established segments compound from their base-year actual by a
//! per-scenario annual rate. Emerging segments have no revenue history, so
//! they follow a sparse launch schedule instead: zero until launch, then the
//! scheduled step values.

use crate::error::{ComputeError, Result};
use crate::growth::cagr;
use crate::projector::{RatePolicy, project};
use crate::reshape::{SeriesBlock, long_frame};
use common::{GrowthRecord, GrowthTable};
use model::{Dataset, Scenario, Segment, SegmentKind, YearValue};
use polars::prelude::DataFrame;
use rust_decimal::Decimal;
use tracing::debug;

/// Projects one segment across the forecast horizon.
pub fn project_segment(
    dataset: &Dataset,
    segment: Segment,
    scenario: Scenario,
) -> Result<Vec<YearValue>> {
    let years = dataset.forecast_years();

    match segment.kind() {
        SegmentKind::Established => {
            let base = dataset
                .segment_actual(segment, dataset.base_year())
                .ok_or_else(|| {
                    ComputeError::MissingData(format!(
                        "actual for segment {} in base year {}",
                        segment,
                        dataset.base_year()
                    ))
                })?;
            let rate = dataset.segment_rate(scenario, segment).ok_or_else(|| {
                ComputeError::MissingData(format!("{} rate for segment {}", scenario, segment))
            })?;
            project(base, &years, &RatePolicy::Constant(rate))
        }
        SegmentKind::Emerging => {
            let schedule = dataset.launch_schedule(scenario, segment).ok_or_else(|| {
                ComputeError::MissingData(format!(
                    "{} launch schedule for segment {}",
                    scenario, segment
                ))
            })?;
            project(
                Decimal::ZERO,
                &years,
                &RatePolicy::Overrides(schedule.clone()),
            )
        }
    }
}

/// Historical actuals plus the projected horizon for the given segments,
/// melted into one long frame.
pub fn segment_timeseries(
    dataset: &Dataset,
    segments: &[Segment],
    scenario: Scenario,
) -> Result<DataFrame> {
    debug!(
        "Building timeseries for {} segments under the {} scenario",
        segments.len(),
        scenario
    );

    let mut blocks = Vec::with_capacity(segments.len());
    for &segment in segments {
        blocks.push(SeriesBlock::new(
            segment.as_str(),
            complete_series(dataset, segment, scenario)?,
        ));
    }

    long_frame(&blocks, dataset.base_year())
}

/// Base-year to end-of-horizon growth for every segment. Emerging segments
/// start from zero revenue, so their CAGR is undefined and reported as
/// `None`.
pub fn segment_growth(dataset: &Dataset, scenario: Scenario) -> Result<GrowthTable> {
    let start_year = dataset.base_year();
    let end_year = dataset.end_year();
    let span = end_year - start_year;

    let mut records = Vec::with_capacity(Segment::ALL.len());
    for segment in Segment::ALL {
        let start_value = dataset.segment_actual(segment, start_year).ok_or_else(|| {
            ComputeError::MissingData(format!("actual for segment {} in {}", segment, start_year))
        })?;
        let end_value = project_segment(dataset, segment, scenario)?
            .last()
            .map(|point| point.value)
            .ok_or_else(|| {
                ComputeError::MissingData(format!("projection for segment {}", segment))
            })?;

        let cagr_pct = if start_value > Decimal::ZERO {
            Some(cagr(start_value, end_value, span)?)
        } else {
            None
        };

        records.push(GrowthRecord {
            entity: segment.as_str().to_string(),
            start_year,
            start_value,
            end_year,
            end_value,
            cagr_pct,
        });
    }

    Ok(GrowthTable::new(scenario.as_str().to_string(), records))
}

pub(crate) fn complete_series(
    dataset: &Dataset,
    segment: Segment,
    scenario: Scenario,
) -> Result<Vec<YearValue>> {
    let mut points = dataset
        .segment_actuals(segment)
        .ok_or_else(|| ComputeError::MissingData(format!("actuals for segment {}", segment)))?
        .to_vec();
    points.extend(project_segment(dataset, segment, scenario)?);
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn values(points: &[YearValue]) -> Vec<Decimal> {
        points.iter().map(|p| p.value).collect()
    }

    #[test]
    fn test_project_established_segment_compounds_annually() {
        let dataset = Dataset::baseline();
        let result = project_segment(&dataset, Segment::Automotive, Scenario::Normal).unwrap();

        assert_eq!(
            values(&result),
            vec![
                dec!(832.36),
                dec!(898.95),
                dec!(970.87),
                dec!(1048.54),
                dec!(1132.42),
                dec!(1223.01)
            ]
        );
    }

    #[test]
    fn test_project_energy_at_forty_percent() {
        let dataset = Dataset::baseline();
        let result = project_segment(&dataset, Segment::Energy, Scenario::Normal).unwrap();

        assert_eq!(
            values(&result),
            vec![
                dec!(141.20),
                dec!(197.68),
                dec!(276.75),
                dec!(387.45),
                dec!(542.43),
                dec!(759.40)
            ]
        );
    }

    #[test]
    fn test_project_emerging_segment_follows_schedule() {
        let dataset = Dataset::baseline();

        let robotics =
            project_segment(&dataset, Segment::HumanoidRobotics, Scenario::Normal).unwrap();
        assert_eq!(
            values(&robotics),
            vec![dec!(0), dec!(3), dec!(20), dec!(90), dec!(200), dec!(300)]
        );

        let ride_hailing =
            project_segment(&dataset, Segment::AutonomousRideHailing, Scenario::Normal).unwrap();
        assert_eq!(
            values(&ride_hailing),
            vec![dec!(0), dec!(0), dec!(5), dec!(80), dec!(130), dec!(200)]
        );
    }

    #[test]
    fn test_emerging_launch_timing_depends_on_scenario() {
        let dataset = Dataset::baseline();

        let conservative =
            project_segment(&dataset, Segment::HumanoidRobotics, Scenario::Conservative).unwrap();
        assert_eq!(
            values(&conservative),
            vec![dec!(0), dec!(0), dec!(10), dec!(40), dec!(100), dec!(180)]
        );

        let optimistic =
            project_segment(&dataset, Segment::HumanoidRobotics, Scenario::Optimistic).unwrap();
        assert_eq!(optimistic[0].value, dec!(1));
        assert_eq!(optimistic[5].value, dec!(430));
    }

    #[test]
    fn test_segment_timeseries_covers_all_years_per_segment() {
        let dataset = Dataset::baseline();
        let df = segment_timeseries(&dataset, &Segment::ALL, Scenario::Normal).unwrap();

        // 5 segments, 3 historical + 6 forecast years each
        assert_eq!(df.height(), 45);
    }

    #[test]
    fn test_segment_growth_reports_emerging_cagr_as_none() {
        let dataset = Dataset::baseline();
        let table = segment_growth(&dataset, Scenario::Normal).unwrap();

        assert_eq!(table.record_count(), 5);
        let by_entity = |name: &str| {
            table
                .records
                .iter()
                .find(|r| r.entity == name)
                .unwrap()
                .clone()
        };

        assert_eq!(by_entity("automotive").cagr_pct, Some(dec!(8.0)));
        assert_eq!(by_entity("energy").cagr_pct, Some(dec!(40.0)));
        assert_eq!(by_entity("services").cagr_pct, Some(dec!(26.0)));
        assert_eq!(by_entity("humanoid-robotics").cagr_pct, None);
        assert_eq!(by_entity("autonomous-ride-hailing").cagr_pct, None);

        let robotics = by_entity("humanoid-robotics");
        assert_eq!(robotics.start_value, dec!(0));
        assert_eq!(robotics.end_value, dec!(300));
    }

    #[test]
    fn test_segment_growth_keeps_canonical_order() {
        let dataset = Dataset::baseline();
        let table = segment_growth(&dataset, Scenario::Optimistic).unwrap();

        let order: Vec<&str> = table.records.iter().map(|r| r.entity.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "automotive",
                "energy",
                "services",
                "humanoid-robotics",
                "autonomous-ride-hailing"
            ]
        );
    }
}
