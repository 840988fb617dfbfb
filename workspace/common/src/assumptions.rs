//! Scenario assumption payloads served by the assumptions endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One step of an emerging-segment launch schedule.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SchedulePoint {
    /// Calendar year
    pub year: i32,
    /// Absolute revenue in billions of dollars
    pub value: Decimal,
}

/// Regional growth-rate assumption, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegionRateDto {
    /// Wire name of the region
    pub region: String,
    /// Growth rate applied to the first forecast year
    pub first_year_pct: Decimal,
    /// Growth rate applied to the remaining horizon years
    pub outer_years_pct: Decimal,
    /// Short justification of the assumed rate
    pub rationale: String,
}

/// Established-segment annual growth rate, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SegmentRateDto {
    /// Wire name of the segment
    pub segment: String,
    /// Compound annual growth rate
    pub annual_pct: Decimal,
}

/// Launch schedule for an emerging segment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LaunchScheduleDto {
    /// Wire name of the segment
    pub segment: String,
    /// Absolute revenue steps in ascending year order; years before the
    /// first step contribute zero
    pub schedule: Vec<SchedulePoint>,
}

/// Full assumption set backing one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScenarioAssumptions {
    /// Wire name of the scenario
    pub scenario: String,
    /// One-line description of the scenario
    pub description: String,
    /// Regional rates, in canonical region order
    pub regions: Vec<RegionRateDto>,
    /// Established-segment rates, in canonical segment order
    pub segments: Vec<SegmentRateDto>,
    /// Emerging-segment launch schedules, in canonical segment order
    pub launches: Vec<LaunchScheduleDto>,
}
