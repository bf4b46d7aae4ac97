pub mod chart;
pub mod last_updated;
pub mod region_selector;
pub mod summary;

pub use chart::Chart;
pub use last_updated::LastUpdated;
pub use region_selector::RegionSelector;
pub use summary::Summary;
