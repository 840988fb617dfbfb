//! Domain model for the revenue projection service: closed entity enums and
//! the immutable baseline dataset every computation works from.

pub mod dataset;
pub mod error;
pub mod region;
pub mod scenario;
pub mod segment;
pub mod series;

pub use dataset::{Dataset, RegionAssumption};
pub use error::ParseError;
pub use region::Region;
pub use scenario::Scenario;
pub use segment::{Segment, SegmentKind};
pub use series::{Year, YearValue};
