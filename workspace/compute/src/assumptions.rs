//! Assumption payloads: dataset rates converted to percent DTOs.

use crate::error::{ComputeError, Result};
use crate::rounding::round1;
use common::{LaunchScheduleDto, RegionRateDto, ScenarioAssumptions, SchedulePoint, SegmentRateDto};
use model::{Dataset, Region, Scenario, Segment};
use rust_decimal::Decimal;

/// Assumption set for one scenario, with rates expressed in percent.
pub fn scenario_assumptions(
    dataset: &Dataset,
    scenario: Scenario,
) -> Result<ScenarioAssumptions> {
    let mut regions = Vec::with_capacity(Region::ALL.len());
    for region in Region::ALL {
        let assumption = dataset.region_assumption(scenario, region).ok_or_else(|| {
            ComputeError::MissingData(format!("{} assumption for region {}", scenario, region))
        })?;
        regions.push(RegionRateDto {
            region: region.as_str().to_string(),
            first_year_pct: as_percent(assumption.first_year_rate),
            outer_years_pct: as_percent(assumption.outer_years_rate),
            rationale: assumption.rationale.to_string(),
        });
    }

    let mut segments = Vec::with_capacity(Segment::ESTABLISHED.len());
    for segment in Segment::ESTABLISHED {
        let rate = dataset.segment_rate(scenario, segment).ok_or_else(|| {
            ComputeError::MissingData(format!("{} rate for segment {}", scenario, segment))
        })?;
        segments.push(SegmentRateDto {
            segment: segment.as_str().to_string(),
            annual_pct: as_percent(rate),
        });
    }

    let mut launches = Vec::with_capacity(Segment::EMERGING.len());
    for segment in Segment::EMERGING {
        let schedule = dataset.launch_schedule(scenario, segment).ok_or_else(|| {
            ComputeError::MissingData(format!(
                "{} launch schedule for segment {}",
                scenario, segment
            ))
        })?;
        launches.push(LaunchScheduleDto {
            segment: segment.as_str().to_string(),
            schedule: schedule
                .iter()
                .map(|(&year, &value)| SchedulePoint { year, value })
                .collect(),
        });
    }

    Ok(ScenarioAssumptions {
        scenario: scenario.as_str().to_string(),
        description: scenario.description().to_string(),
        regions,
        segments,
        launches,
    })
}

/// Assumption sets for every scenario, cautious to aggressive.
pub fn all_scenario_assumptions(dataset: &Dataset) -> Result<Vec<ScenarioAssumptions>> {
    Scenario::ALL
        .into_iter()
        .map(|scenario| scenario_assumptions(dataset, scenario))
        .collect()
}

fn as_percent(rate: Decimal) -> Decimal {
    round1(rate * Decimal::ONE_HUNDRED)
}
