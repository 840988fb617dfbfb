pub mod converters;
pub mod query;
