//! Whole-company outlook payloads: per-year totals and revenue mix.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Segment subtotals and growth for a single year.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OutlookRow {
    /// Calendar year
    pub year: i32,
    /// Sum of the established segments
    pub established: Decimal,
    /// Sum of the emerging segments
    pub emerging: Decimal,
    /// Total revenue, always the sum of the two subtotals
    pub total: Decimal,
    /// Percent change of `total` against the previous covered year.
    /// `None` for the first covered year.
    pub yoy_pct: Option<Decimal>,
}

/// Year-by-year outlook under one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScenarioOutlook {
    /// Scenario the rows were computed under
    pub scenario: String,
    /// One row per covered year, in ascending year order
    pub rows: Vec<OutlookRow>,
}

impl ScenarioOutlook {
    pub fn new(scenario: String, rows: Vec<OutlookRow>) -> Self {
        Self { scenario, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total revenue in the last covered year, if any rows are present.
    pub fn final_total(&self) -> Option<Decimal> {
        self.rows.last().map(|row| row.total)
    }
}

/// One segment's slice of the revenue mix in a given year.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StructureSlice {
    /// Wire name of the segment
    pub segment: String,
    /// Revenue in billions of dollars
    pub revenue: Decimal,
    /// Share of total revenue in percent, one decimal place
    pub share_pct: Decimal,
    /// Base-year-to-target-year CAGR in percent.
    /// `None` for segments with no base-year revenue or for historical years.
    pub cagr_pct: Option<Decimal>,
}

/// Revenue mix across all segments for a single year.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StructureBreakdown {
    /// Scenario the mix was computed under
    pub scenario: String,
    /// Year the breakdown covers
    pub year: i32,
    /// Total revenue across all segments
    pub total_revenue: Decimal,
    /// Base-year-to-target-year CAGR of the total, when the span is positive
    pub total_cagr_pct: Option<Decimal>,
    /// One slice per segment, in canonical segment order
    pub slices: Vec<StructureSlice>,
}

impl StructureBreakdown {
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }
}
