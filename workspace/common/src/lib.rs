//! Common transport-layer types shared between the compute engine and the
//! API surface. These structs mirror the backend handlers' response payloads
//! so callers can deserialize API responses without duplicating shapes.

mod assumptions;
mod growth;
mod outlook;
mod timeseries;

pub mod converters;

pub use assumptions::{
    LaunchScheduleDto, RegionRateDto, ScenarioAssumptions, SchedulePoint, SegmentRateDto,
};
pub use converters::{create_revenue_point, create_revenue_points, timeseries_to_raw_data};
pub use growth::{GrowthRecord, GrowthTable, YearRevenue, YearTable};
pub use outlook::{OutlookRow, ScenarioOutlook, StructureBreakdown, StructureSlice};
pub use timeseries::{DataKind, RevenuePoint, RevenueTimeseries};
