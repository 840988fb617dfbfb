//! Shared rounding helpers. Revenue rounds to two decimal places and
//! percentages to one, both half away from zero, matching the published
//! forecast tables.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a revenue value to two decimal places.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a percentage to one decimal place.
pub fn round1(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
