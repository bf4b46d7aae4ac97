/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (30 minutes = 1,800,000ms)
    pub const POLLING_INTERVAL_MS: u32 = 1_800_000;
}
