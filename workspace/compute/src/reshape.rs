//! Long-format assembly of per-entity series.

use crate::error::Result;
use common::DataKind;
use model::{Year, YearValue};
use polars::prelude::*;

pub const ENTITY_COL: &str = "entity";
pub const YEAR_COL: &str = "year";
pub const VALUE_COL: &str = "value";
pub const KIND_COL: &str = "kind";

/// One entity's year-value series, in the order it should appear.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBlock {
    pub entity: String,
    pub points: Vec<YearValue>,
}

impl SeriesBlock {
    pub fn new(entity: impl Into<String>, points: Vec<YearValue>) -> Self {
        Self {
            entity: entity.into(),
            points,
        }
    }
}

/// Melts the given blocks into one long frame with columns
/// `entity | year | value | kind`.
///
/// Rows stay entity-major: all of the first block's points, then the next
/// block's, each in its given point order. Nothing is deduplicated or
/// reordered. Values are carried as decimal strings; `kind` is `historical`
/// for years at or before `cutoff_year` and `forecast` after it.
pub fn long_frame(blocks: &[SeriesBlock], cutoff_year: Year) -> Result<DataFrame> {
    let mut entities = Vec::new();
    let mut years = Vec::new();
    let mut values = Vec::new();

    for block in blocks {
        for point in &block.points {
            entities.push(block.entity.clone());
            years.push(point.year);
            values.push(point.value.to_string());
        }
    }

    let df = DataFrame::new(vec![
        Series::new(ENTITY_COL.into(), entities).into(),
        Series::new(YEAR_COL.into(), years).into(),
        Series::new(VALUE_COL.into(), values).into(),
    ])?;

    let df = df
        .lazy()
        .with_column(
            when(col(YEAR_COL).lt_eq(lit(cutoff_year)))
                .then(lit(DataKind::Historical.as_str()))
                .otherwise(lit(DataKind::Forecast.as_str()))
                .alias(KIND_COL),
        )
        .collect()?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_blocks() -> Vec<SeriesBlock> {
        vec![
            SeriesBlock::new(
                "europe",
                vec![
                    YearValue::new(2023, dec!(100.41)),
                    YearValue::new(2024, dec!(104.26)),
                    YearValue::new(2025, dec!(116.77)),
                ],
            ),
            SeriesBlock::new(
                "china",
                vec![
                    YearValue::new(2023, dec!(251.01)),
                    YearValue::new(2024, dec!(250.24)),
                    YearValue::new(2025, dec!(267.76)),
                ],
            ),
        ]
    }

    #[test]
    fn test_long_frame_shape_and_columns() {
        let df = long_frame(&sample_blocks(), 2024).unwrap();

        assert_eq!(df.height(), 6);
        assert_eq!(
            df.get_column_names_str(),
            vec![ENTITY_COL, YEAR_COL, VALUE_COL, KIND_COL]
        );
    }

    #[test]
    fn test_long_frame_keeps_entity_major_order() {
        let df = long_frame(&sample_blocks(), 2024).unwrap();
        let entities = df.column(ENTITY_COL).unwrap().str().unwrap();

        let order: Vec<&str> = (0..df.height()).map(|i| entities.get(i).unwrap()).collect();
        assert_eq!(
            order,
            vec!["europe", "europe", "europe", "china", "china", "china"]
        );
    }

    #[test]
    fn test_kind_splits_on_cutoff_year() {
        let df = long_frame(&sample_blocks(), 2024).unwrap();
        let years = df.column(YEAR_COL).unwrap().i32().unwrap();
        let kinds = df.column(KIND_COL).unwrap().str().unwrap();

        for i in 0..df.height() {
            let expected = if years.get(i).unwrap() <= 2024 {
                "historical"
            } else {
                "forecast"
            };
            assert_eq!(kinds.get(i).unwrap(), expected);
        }
    }

    #[test]
    fn test_values_are_decimal_strings() {
        let df = long_frame(&sample_blocks(), 2024).unwrap();
        let values = df.column(VALUE_COL).unwrap().str().unwrap();

        assert_eq!(values.get(0).unwrap(), "100.41");
        assert_eq!(values.get(5).unwrap(), "267.76");
    }

    #[test]
    fn test_duplicate_years_are_preserved() {
        let blocks = vec![SeriesBlock::new(
            "europe",
            vec![
                YearValue::new(2024, dec!(1)),
                YearValue::new(2024, dec!(2)),
            ],
        )];

        let df = long_frame(&blocks, 2024).unwrap();
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_empty_blocks_give_empty_frame() {
        let df = long_frame(&[], 2024).unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(
            df.get_column_names_str(),
            vec![ENTITY_COL, YEAR_COL, VALUE_COL, KIND_COL]
        );
    }
}
