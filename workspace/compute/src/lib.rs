//! Pure computation layer for the revenue projection model.
//!
//! Every function in this crate is a deterministic function of the immutable
//! [`model::Dataset`] and the requested scenario: no I/O, no shared state,
//! no clock. Calling anything twice with the same inputs yields the same
//! output.

pub mod assumptions;
pub mod error;
pub mod growth;
pub mod outlook;
pub mod projector;
pub mod regional;
pub mod reshape;
pub mod rounding;
pub mod segments;

pub use error::{ComputeError, Result};
pub use growth::cagr;
pub use projector::{RatePolicy, project};
pub use reshape::SeriesBlock;
