use rust_decimal::Decimal;
use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The base value of a rate-based projection must be positive
    #[error("Base value must be positive for rate-based projection, got {value}")]
    NonPositiveBaseValue { value: Decimal },

    /// The requested projection horizon contains no years
    #[error("Projection horizon is empty")]
    EmptyHorizon,

    /// The requested projection horizon repeats a year
    #[error("Projection horizon contains duplicate year {year}")]
    DuplicateYear { year: i32 },

    /// The requested projection horizon is not strictly increasing
    #[error("Projection horizon is not strictly increasing at year {year}")]
    UnorderedHorizon { year: i32 },

    /// A per-year rate policy has no entry for a requested year
    #[error("No growth rate provided for year {year}")]
    MissingRate { year: i32 },

    /// CAGR is undefined for a non-positive start value
    #[error("CAGR start value must be positive, got {value}")]
    NonPositiveStartValue { value: Decimal },

    /// CAGR is undefined for a negative end value
    #[error("CAGR end value must not be negative, got {value}")]
    NegativeEndValue { value: Decimal },

    /// CAGR is undefined over a zero-length span
    #[error("CAGR year span must be at least one year")]
    ZeroYearSpan,

    /// A requested year falls outside the dataset coverage
    #[error("Year {year} is outside the covered range {start}-{end}")]
    YearOutOfCoverage { year: i32, start: i32, end: i32 },

    /// The dataset has no entry for a requested lookup
    #[error("Missing dataset entry: {0}")]
    MissingData(String),

    /// Error from decimal operations
    #[error("Decimal error: {0}")]
    Decimal(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),
}

impl ComputeError {
    /// True when the error was caused by the caller's input rather than by
    /// internal computation plumbing. The API maps these to 400 responses.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ComputeError::NonPositiveBaseValue { .. }
                | ComputeError::EmptyHorizon
                | ComputeError::DuplicateYear { .. }
                | ComputeError::UnorderedHorizon { .. }
                | ComputeError::MissingRate { .. }
                | ComputeError::NonPositiveStartValue { .. }
                | ComputeError::NegativeEndValue { .. }
                | ComputeError::ZeroYearSpan
                | ComputeError::YearOutOfCoverage { .. }
        )
    }
}

// Implement From<polars::error::PolarsError> for ComputeError
impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        let compute_error = match error {
            polars::error::PolarsError::NoData(_) => {
                let err = ComputeError::DataFrame(format!("No data: {}", error));
                error!(?err, "DataFrame error: No data");
                err
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Shape mismatch: {}", error));
                error!(?err, "DataFrame error: Shape mismatch");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            polars::error::PolarsError::ComputeError(_) => {
                let err = ComputeError::DataFrame(format!("Compute error: {}", error));
                error!(?err, "DataFrame error: Compute error");
                err
            }
            polars::error::PolarsError::OutOfBounds(_) => {
                let err = ComputeError::DataFrame(format!("Out of bounds: {}", error));
                error!(?err, "DataFrame error: Out of bounds");
                err
            }
            _ => {
                let err = ComputeError::Series(format!("Series error: {}", error));
                error!(?err, "Series error");
                err
            }
        };
        compute_error
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
