pub mod error;
pub mod metric;
pub mod summary;
pub mod timeseries;
