//! Long-format revenue series payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Whether a value was observed or projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    /// Observed actuals up to and including the base year.
    Historical,
    /// Projected values beyond the base year.
    Forecast,
}

impl DataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::Historical => "historical",
            DataKind::Forecast => "forecast",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "historical" => Ok(DataKind::Historical),
            "forecast" => Ok(DataKind::Forecast),
            other => Err(format!("Unknown data kind '{}'", other)),
        }
    }
}

/// One revenue observation: an entity (region or segment), a year, the value
/// in billions of dollars, and whether it is history or forecast.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RevenuePoint {
    /// Wire name of the region or segment this row belongs to
    pub entity: String,
    /// Calendar year
    pub year: i32,
    /// Revenue in billions of dollars
    pub value: Decimal,
    /// Observed or projected
    pub kind: DataKind,
}

impl RevenuePoint {
    pub fn new(entity: String, year: i32, value: Decimal, kind: DataKind) -> Self {
        Self {
            entity,
            year,
            value,
            kind,
        }
    }
}

/// Long-format series covering one or more entities.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RevenueTimeseries {
    /// Ordered data points
    pub points: Vec<RevenuePoint>,
}

impl RevenueTimeseries {
    pub fn new(points: Vec<RevenuePoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Number of distinct entities in the series.
    pub fn entity_count(&self) -> usize {
        let mut entities: Vec<&str> = self.points.iter().map(|p| p.entity.as_str()).collect();
        entities.sort_unstable();
        entities.dedup();
        entities.len()
    }

    /// First and last year covered, if the series is non-empty.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.points.iter().map(|p| p.year).min()?;
        let max = self.points.iter().map(|p| p.year).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn point(entity: &str, year: i32, value: &str, kind: DataKind) -> RevenuePoint {
        RevenuePoint::new(
            entity.to_string(),
            year,
            Decimal::from_str(value).unwrap(),
            kind,
        )
    }

    #[test]
    fn test_data_kind_round_trip() {
        assert_eq!("historical".parse::<DataKind>(), Ok(DataKind::Historical));
        assert_eq!("forecast".parse::<DataKind>(), Ok(DataKind::Forecast));
        assert_eq!(DataKind::Historical.to_string(), "historical");
        assert!("past".parse::<DataKind>().is_err());
    }

    #[test]
    fn test_revenue_point_serializes_value_as_string() {
        let p = point("europe", 2024, "104.26", DataKind::Historical);
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["entity"], "europe");
        assert_eq!(json["year"], 2024);
        assert_eq!(json["value"], "104.26");
        assert_eq!(json["kind"], "historical");
    }

    #[test]
    fn test_revenue_point_deserializes() {
        let json = r#"{"entity":"china","year":2027,"value":"306.56","kind":"forecast"}"#;
        let p: RevenuePoint = serde_json::from_str(json).unwrap();

        assert_eq!(p.entity, "china");
        assert_eq!(p.value, Decimal::from_str("306.56").unwrap());
        assert_eq!(p.kind, DataKind::Forecast);
    }

    #[test]
    fn test_timeseries_accessors() {
        let ts = RevenueTimeseries::new(vec![
            point("europe", 2022, "80.00", DataKind::Historical),
            point("europe", 2025, "116.77", DataKind::Forecast),
            point("china", 2022, "181.45", DataKind::Historical),
        ]);

        assert_eq!(ts.len(), 3);
        assert!(!ts.is_empty());
        assert_eq!(ts.entity_count(), 2);
        assert_eq!(ts.year_span(), Some((2022, 2025)));
    }

    #[test]
    fn test_empty_timeseries() {
        let ts = RevenueTimeseries::new(vec![]);

        assert!(ts.is_empty());
        assert_eq!(ts.entity_count(), 0);
        assert_eq!(ts.year_span(), None);
    }
}
