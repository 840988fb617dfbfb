//! Compound annual growth rate.

use crate::error::{ComputeError, Result};
use crate::rounding::round1;
use rust_decimal::{Decimal, MathematicalOps};

/// Compound annual growth rate between two values, in percent.
///
/// `((end / start)^(1/n) - 1) * 100`, rounded to 1 decimal place. A start
/// value at or below zero has no defined growth rate and is rejected; a
/// negative end value has no real n-th root and is rejected as well. An end
/// value of exactly zero yields -100.0.
pub fn cagr(start_value: Decimal, end_value: Decimal, n_years: i32) -> Result<Decimal> {
    if start_value <= Decimal::ZERO {
        return Err(ComputeError::NonPositiveStartValue { value: start_value });
    }
    if end_value < Decimal::ZERO {
        return Err(ComputeError::NegativeEndValue { value: end_value });
    }
    if n_years <= 0 {
        return Err(ComputeError::ZeroYearSpan);
    }

    let ratio = end_value
        .checked_div(start_value)
        .ok_or_else(|| ComputeError::Decimal("value ratio overflowed".to_string()))?;
    let exponent = Decimal::ONE
        .checked_div(Decimal::from(n_years))
        .ok_or_else(|| ComputeError::Decimal("year span reciprocal overflowed".to_string()))?;
    let annual_factor = ratio
        .checked_powd(exponent)
        .ok_or_else(|| ComputeError::Decimal("annual growth factor is undefined".to_string()))?;

    Ok(round1((annual_factor - Decimal::ONE) * Decimal::ONE_HUNDRED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cagr_matches_worked_example() {
        // Asia-Pacific, 62.56 in 2024 to 186.79 in 2030
        assert_eq!(cagr(dec!(62.56), dec!(186.79), 6).unwrap(), dec!(20.0));
    }

    #[test]
    fn test_cagr_recovers_constant_rates_from_rounded_chains() {
        // End values produced by compounding the rounded chain still land on
        // the underlying rate after rounding to one decimal place.
        assert_eq!(cagr(dec!(438.00), dec!(554.22), 6).unwrap(), dec!(4.0));
        assert_eq!(cagr(dec!(250.24), dec!(375.55), 6).unwrap(), dec!(7.0));
        assert_eq!(cagr(dec!(104.26), dec!(205.79), 6).unwrap(), dec!(12.0));
        assert_eq!(cagr(dec!(101.15), dec!(146.77), 6).unwrap(), dec!(6.4));
    }

    #[test]
    fn test_cagr_of_flat_series_is_zero() {
        assert_eq!(cagr(dec!(100), dec!(100), 5).unwrap(), dec!(0.0));
    }

    #[test]
    fn test_cagr_of_decline_is_negative() {
        assert_eq!(cagr(dec!(200), dec!(100), 3).unwrap(), dec!(-20.6));
    }

    #[test]
    fn test_cagr_to_zero_end_is_total_loss() {
        assert_eq!(cagr(dec!(100), dec!(0), 4).unwrap(), dec!(-100.0));
    }

    #[test]
    fn test_cagr_rejects_non_positive_start() {
        let err = cagr(dec!(0), dec!(100), 5).unwrap_err();
        assert!(matches!(err, ComputeError::NonPositiveStartValue { .. }));

        let err = cagr(dec!(-5), dec!(100), 5).unwrap_err();
        assert!(matches!(err, ComputeError::NonPositiveStartValue { .. }));
    }

    #[test]
    fn test_cagr_rejects_negative_end() {
        let err = cagr(dec!(100), dec!(-1), 5).unwrap_err();
        assert!(matches!(err, ComputeError::NegativeEndValue { .. }));
    }

    #[test]
    fn test_cagr_rejects_non_positive_span() {
        assert!(matches!(
            cagr(dec!(100), dec!(120), 0).unwrap_err(),
            ComputeError::ZeroYearSpan
        ));
        assert!(matches!(
            cagr(dec!(100), dec!(120), -2).unwrap_err(),
            ComputeError::ZeroYearSpan
        ));
    }
}
