use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Calendar year, the sole time index of the model.
pub type Year = i32;

/// A single (year, value) observation in billions of dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: Year,
    pub value: Decimal,
}

impl YearValue {
    pub fn new(year: Year, value: Decimal) -> Self {
        Self { year, value }
    }
}
