pub mod use_region;
pub mod use_summary;
pub mod use_timeseries;
pub mod use_version;
