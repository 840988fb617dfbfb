//! Year-by-year revenue projection.
//!
//! Every policy shares one contract: the requested years must form a
//! non-empty, strictly increasing sequence, and the output carries exactly
//! one rounded value per requested year. A failed validation returns an
//! error and never a partial table.

use crate::error::{ComputeError, Result};
use crate::rounding::round2;
use model::{Year, YearValue};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// How forecast values are derived for the requested years.
#[derive(Debug, Clone, PartialEq)]
pub enum RatePolicy {
    /// Compound by a single fractional rate every year.
    Constant(Decimal),
    /// Compound by a year-specific fractional rate; every requested year
    /// must have an entry.
    PerYear(BTreeMap<Year, Decimal>),
    /// Absolute values per year; years without an entry resolve to zero.
    /// The base value is ignored.
    Overrides(BTreeMap<Year, Decimal>),
}

/// Project `base_value` across `years` under the given policy.
///
/// Rate-based policies compound from the previous rounded value, so the
/// recurrence is `v[i] = round2(v[i-1] * (1 + rate))` with `v[0]` seeded by
/// `base_value`. This reproduces the published tables exactly:
/// `project(104.26, [2025, 2026], Constant(0.12))` yields 116.77 and 130.78.
pub fn project(base_value: Decimal, years: &[Year], policy: &RatePolicy) -> Result<Vec<YearValue>> {
    validate_years(years)?;

    match policy {
        RatePolicy::Constant(rate) => {
            require_positive_base(base_value)?;
            let mut out = Vec::with_capacity(years.len());
            let mut previous = base_value;
            for &year in years {
                let value = round2(previous * (Decimal::ONE + rate));
                out.push(YearValue::new(year, value));
                previous = value;
            }
            Ok(out)
        }
        RatePolicy::PerYear(rates) => {
            require_positive_base(base_value)?;
            let mut out = Vec::with_capacity(years.len());
            let mut previous = base_value;
            for &year in years {
                let rate = rates
                    .get(&year)
                    .copied()
                    .ok_or(ComputeError::MissingRate { year })?;
                let value = round2(previous * (Decimal::ONE + rate));
                out.push(YearValue::new(year, value));
                previous = value;
            }
            Ok(out)
        }
        RatePolicy::Overrides(values) => Ok(years
            .iter()
            .map(|&year| {
                let value = values.get(&year).copied().unwrap_or(Decimal::ZERO);
                YearValue::new(year, round2(value))
            })
            .collect()),
    }
}

fn validate_years(years: &[Year]) -> Result<()> {
    if years.is_empty() {
        return Err(ComputeError::EmptyHorizon);
    }
    for pair in years.windows(2) {
        if pair[1] == pair[0] {
            return Err(ComputeError::DuplicateYear { year: pair[0] });
        }
        if pair[1] < pair[0] {
            return Err(ComputeError::UnorderedHorizon { year: pair[1] });
        }
    }
    Ok(())
}

fn require_positive_base(base_value: Decimal) -> Result<()> {
    if base_value <= Decimal::ZERO {
        return Err(ComputeError::NonPositiveBaseValue { value: base_value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HORIZON: [Year; 6] = [2025, 2026, 2027, 2028, 2029, 2030];

    fn values(points: &[YearValue]) -> Vec<Decimal> {
        points.iter().map(|p| p.value).collect()
    }

    #[test]
    fn test_constant_rate_matches_published_europe_path() {
        let result = project(dec!(104.26), &HORIZON, &RatePolicy::Constant(dec!(0.12))).unwrap();

        assert_eq!(
            values(&result),
            vec![
                dec!(116.77),
                dec!(130.78),
                dec!(146.47),
                dec!(164.05),
                dec!(183.74),
                dec!(205.79)
            ]
        );
        assert_eq!(result[0].year, 2025);
        assert_eq!(result[5].year, 2030);
    }

    #[test]
    fn test_constant_rate_rounds_exact_midpoints_up() {
        // China 2027: 286.50 * 1.07 = 306.5550, published as 306.56
        let result = project(dec!(250.24), &HORIZON, &RatePolicy::Constant(dec!(0.07))).unwrap();

        assert_eq!(result[0].value, dec!(267.76));
        assert_eq!(result[1].value, dec!(286.50));
        assert_eq!(result[2].value, dec!(306.56));
    }

    #[test]
    fn test_recurrence_compounds_from_rounded_values() {
        let result = project(dec!(104.26), &HORIZON, &RatePolicy::Constant(dec!(0.12))).unwrap();

        for pair in result.windows(2) {
            let recomputed = crate::rounding::round2(pair[0].value * dec!(1.12));
            assert_eq!(pair[1].value, recomputed);
        }
    }

    #[test]
    fn test_per_year_rates_switch_between_years() {
        let mut rates = BTreeMap::new();
        rates.insert(2025, dec!(0.10));
        rates.insert(2026, dec!(0.20));

        let result = project(dec!(100), &[2025, 2026], &RatePolicy::PerYear(rates)).unwrap();

        assert_eq!(values(&result), vec![dec!(110.00), dec!(132.00)]);
    }

    #[test]
    fn test_per_year_missing_rate_fails() {
        let mut rates = BTreeMap::new();
        rates.insert(2025, dec!(0.10));

        let err = project(dec!(100), &[2025, 2026], &RatePolicy::PerYear(rates)).unwrap_err();

        assert!(matches!(err, ComputeError::MissingRate { year: 2026 }));
    }

    #[test]
    fn test_overrides_default_missing_years_to_zero() {
        let mut schedule = BTreeMap::new();
        schedule.insert(2026, dec!(3));
        schedule.insert(2027, dec!(20));

        let result = project(
            Decimal::ZERO,
            &[2025, 2026, 2027],
            &RatePolicy::Overrides(schedule),
        )
        .unwrap();

        assert_eq!(values(&result), vec![dec!(0), dec!(3), dec!(20)]);
    }

    #[test]
    fn test_overrides_ignore_base_value() {
        let mut schedule = BTreeMap::new();
        schedule.insert(2025, dec!(5));

        // A zero or negative base is fine when no rate is applied
        assert!(project(dec!(0), &[2025], &RatePolicy::Overrides(schedule.clone())).is_ok());
        assert!(project(dec!(-1), &[2025], &RatePolicy::Overrides(schedule)).is_ok());
    }

    #[test]
    fn test_non_positive_base_rejected_for_rate_policies() {
        let err = project(dec!(0), &HORIZON, &RatePolicy::Constant(dec!(0.05))).unwrap_err();
        assert!(matches!(err, ComputeError::NonPositiveBaseValue { .. }));

        let err = project(dec!(-10), &HORIZON, &RatePolicy::Constant(dec!(0.05))).unwrap_err();
        assert!(matches!(err, ComputeError::NonPositiveBaseValue { .. }));
    }

    #[test]
    fn test_empty_horizon_rejected() {
        let err = project(dec!(100), &[], &RatePolicy::Constant(dec!(0.05))).unwrap_err();
        assert!(matches!(err, ComputeError::EmptyHorizon));
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let err = project(
            dec!(100),
            &[2025, 2025],
            &RatePolicy::Constant(dec!(0.05)),
        )
        .unwrap_err();
        assert!(matches!(err, ComputeError::DuplicateYear { year: 2025 }));
    }

    #[test]
    fn test_unordered_horizon_rejected() {
        let err = project(
            dec!(100),
            &[2026, 2025],
            &RatePolicy::Constant(dec!(0.05)),
        )
        .unwrap_err();
        assert!(matches!(err, ComputeError::UnorderedHorizon { year: 2025 }));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let policy = RatePolicy::Constant(dec!(0.064));
        let first = project(dec!(101.15), &HORIZON, &policy).unwrap();
        let second = project(dec!(101.15), &HORIZON, &policy).unwrap();

        assert_eq!(first, second);
    }
}
