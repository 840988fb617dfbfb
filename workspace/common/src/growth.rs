//! Growth summaries and single-year ranking tables.

use crate::timeseries::DataKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Growth of one entity between the base year and the end of the horizon.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GrowthRecord {
    /// Wire name of the region or segment
    pub entity: String,
    /// First year of the span (the base year)
    pub start_year: i32,
    /// Revenue at the start of the span
    pub start_value: Decimal,
    /// Last year of the span
    pub end_year: i32,
    /// Revenue at the end of the span
    pub end_value: Decimal,
    /// Compound annual growth rate in percent, one decimal place.
    /// `None` when the entity had no revenue in the start year.
    pub cagr_pct: Option<Decimal>,
}

/// Growth records for every entity under one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GrowthTable {
    /// Scenario the records were computed under
    pub scenario: String,
    /// One record per entity, in canonical entity order
    pub records: Vec<GrowthRecord>,
}

impl GrowthTable {
    pub fn new(scenario: String, records: Vec<GrowthRecord>) -> Self {
        Self { scenario, records }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// One row of a single-year revenue ranking.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct YearRevenue {
    /// Wire name of the region or segment
    pub entity: String,
    /// Revenue in billions of dollars
    pub value: Decimal,
}

/// Revenue of every entity in a single year, sorted descending by value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct YearTable {
    /// Scenario the values were computed under
    pub scenario: String,
    /// Year the table covers
    pub year: i32,
    /// Whether the year falls in history or in the forecast horizon
    pub kind: DataKind,
    /// Rows sorted by value, largest first
    pub rows: Vec<YearRevenue>,
}

impl YearTable {
    pub fn new(scenario: String, year: i32, kind: DataKind, rows: Vec<YearRevenue>) -> Self {
        Self {
            scenario,
            year,
            kind,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Entity with the largest revenue, if any rows are present.
    pub fn leader(&self) -> Option<&YearRevenue> {
        self.rows.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_growth_record_serializes_optional_cagr() {
        let record = GrowthRecord {
            entity: "humanoid-robotics".to_string(),
            start_year: 2024,
            start_value: Decimal::ZERO,
            end_year: 2030,
            end_value: Decimal::from_str("300").unwrap(),
            cagr_pct: None,
        };
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["cagr_pct"], serde_json::Value::Null);
        assert_eq!(json["end_value"], "300");
    }

    #[test]
    fn test_year_table_leader() {
        let table = YearTable::new(
            "normal".to_string(),
            2030,
            DataKind::Forecast,
            vec![
                YearRevenue {
                    entity: "united-states".to_string(),
                    value: Decimal::from_str("554.22").unwrap(),
                },
                YearRevenue {
                    entity: "china".to_string(),
                    value: Decimal::from_str("375.55").unwrap(),
                },
            ],
        );

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.leader().unwrap().entity, "united-states");
    }
}
