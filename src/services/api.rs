use std::collections::HashMap;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::models::{
    error::AppError,
    summary::SummaryRecord,
    timeseries::{SeriesPoint, Timeseries},
};

// CONSTANTS
const BASE_URL: &str = "https://api.opencovid.ca";

/// Geographic selector for the OpenCOVID API: the national aggregate or a
/// province/territory reported under its standard two-letter abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Region {
    /// National aggregate, queried as `geo=can`.
    #[default]
    Canada,
    /// Alberta
    AB,
    /// British Columbia
    BC,
    /// Manitoba
    MB,
    /// New Brunswick
    NB,
    /// Newfoundland and Labrador
    NL,
    /// Northwest Territories
    NT,
    /// Nova Scotia
    NS,
    /// Nunavut
    NU,
    /// Ontario
    ON,
    /// Prince Edward Island
    PE,
    /// Quebec
    QC,
    /// Saskatchewan
    SK,
    /// Yukon
    YT,
}

impl Region {
    /// Returns the code used in API query strings and the region selector.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Canada => "canada",
            Region::AB => "AB",
            Region::BC => "BC",
            Region::MB => "MB",
            Region::NB => "NB",
            Region::NL => "NL",
            Region::NT => "NT",
            Region::NS => "NS",
            Region::NU => "NU",
            Region::ON => "ON",
            Region::PE => "PE",
            Region::QC => "QC",
            Region::SK => "SK",
            Region::YT => "YT",
        }
    }

    /// Returns the human-readable name of the region.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Canada => "Canada",
            Region::AB => "Alberta",
            Region::BC => "British Columbia",
            Region::MB => "Manitoba",
            Region::NB => "New Brunswick",
            Region::NL => "Newfoundland and Labrador",
            Region::NT => "Northwest Territories",
            Region::NS => "Nova Scotia",
            Region::NU => "Nunavut",
            Region::ON => "Ontario",
            Region::PE => "Prince Edward Island",
            Region::QC => "Quebec",
            Region::SK => "Saskatchewan",
            Region::YT => "Yukon",
        }
    }

    /// All selectable regions, ordered alphabetically by name.
    pub fn all() -> &'static [Region] {
        &[
            Region::AB,
            Region::BC,
            Region::Canada,
            Region::MB,
            Region::NB,
            Region::NL,
            Region::NT,
            Region::NS,
            Region::NU,
            Region::ON,
            Region::PE,
            Region::QC,
            Region::SK,
            Region::YT,
        ]
    }

    /// True for the national aggregate, which the API special-cases.
    pub fn is_national(&self) -> bool {
        matches!(self, Region::Canada)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CANADA" => Ok(Region::Canada),
            "AB" => Ok(Region::AB),
            "BC" => Ok(Region::BC),
            "MB" => Ok(Region::MB),
            "NB" => Ok(Region::NB),
            "NL" => Ok(Region::NL),
            "NT" => Ok(Region::NT),
            "NS" => Ok(Region::NS),
            "NU" => Ok(Region::NU),
            "ON" => Ok(Region::ON),
            "PE" => Ok(Region::PE),
            "QC" => Ok(Region::QC),
            "SK" => Ok(Region::SK),
            "YT" => Ok(Region::YT),
            _ => Err(AppError::ConfigError(format!("Invalid region code: {s}"))),
        }
    }
}

// API CONFIGURATION
/// Configuration for the OpenCOVID API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Constructs the URL for the dataset version endpoint.
    pub fn version_url(&self) -> String {
        format!("{}/version", self.base_url)
    }

    /// Constructs the URL for a region's cumulative summary.
    pub fn summary_url(&self, region: Region) -> String {
        if region.is_national() {
            format!("{}/summary?geo=can", self.base_url)
        } else {
            format!("{}/summary?loc={}", self.base_url, region.code())
        }
    }

    /// Constructs the URL for a region's metric time series.
    ///
    /// Provincial requests add `ymd=true` so dates come back as
    /// `YYYY-MM-DD`; the national endpoint is queried as-is.
    pub fn timeseries_url(&self, region: Region) -> String {
        if region.is_national() {
            format!("{}/timeseries?geo=can", self.base_url)
        } else {
            format!("{}/timeseries?loc={}&ymd=true", self.base_url, region.code())
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct VersionResponse {
    version: String,
}

#[derive(Deserialize, Debug)]
struct SummaryResponse {
    #[serde(default)]
    data: Vec<SummaryRecord>,
}

#[derive(Deserialize, Debug)]
struct TimeseriesResponse {
    #[serde(default)]
    data: HashMap<String, Vec<SeriesPoint>>,
}

// OPENCOVID CLIENT
/// HTTP client for the OpenCOVID API.
pub struct OpenCovidClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl OpenCovidClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the dataset version string ("last updated").
    pub async fn fetch_version(&self) -> Result<String, AppError> {
        let response: VersionResponse = self.get_json(&self.config.version_url()).await?;
        Ok(response.version)
    }

    /// Fetches the cumulative summary for a region.
    ///
    /// The API wraps the record in a one-element `data` array; an empty
    /// array is not an error and produces a blank record.
    pub async fn fetch_summary(&self, region: Region) -> Result<SummaryRecord, AppError> {
        let response: SummaryResponse = self.get_json(&self.config.summary_url(region)).await?;
        Ok(response.data.into_iter().next().unwrap_or_default())
    }

    /// Fetches the metric time series for a region.
    ///
    /// A response without a `data` object yields the empty collection.
    pub async fn fetch_timeseries(&self, region: Region) -> Result<Timeseries, AppError> {
        let response: TimeseriesResponse =
            self.get_json(&self.config.timeseries_url(region)).await?;
        Ok(Timeseries::from_raw(response.data))
    }

    /// Executes a single GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ApiError(format!("HTTP {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

impl Default for OpenCovidClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the dataset version using default configuration.
pub async fn fetch_version() -> Result<String, AppError> {
    OpenCovidClient::new()?.fetch_version().await
}

/// Fetches the summary for a region using default configuration.
pub async fn fetch_summary_for_region(region: Region) -> Result<SummaryRecord, AppError> {
    OpenCovidClient::new()?.fetch_summary(region).await
}

/// Fetches the time series for a region using default configuration.
pub async fn fetch_timeseries_for_region(region: Region) -> Result<Timeseries, AppError> {
    OpenCovidClient::new()?.fetch_timeseries(region).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parsing() {
        assert_eq!("BC".parse::<Region>().unwrap(), Region::BC);
        assert_eq!("bc".parse::<Region>().unwrap(), Region::BC);
        assert_eq!("canada".parse::<Region>().unwrap(), Region::Canada);
        assert_eq!("Canada".parse::<Region>().unwrap(), Region::Canada);
        assert!("XX".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_code() {
        assert_eq!(Region::Canada.code(), "canada");
        assert_eq!(Region::ON.code(), "ON");
        assert_eq!(Region::YT.code(), "YT");
    }

    #[test]
    fn test_all_regions() {
        let regions = Region::all();
        assert_eq!(regions.len(), 14);
        assert_eq!(regions.iter().filter(|r| r.is_national()).count(), 1);
    }

    #[test]
    fn test_default_region_is_canada() {
        assert_eq!(Region::default(), Region::Canada);
    }

    #[test]
    fn test_national_urls_use_geo_can() {
        let config = ApiConfig::builder().build();
        assert_eq!(
            config.summary_url(Region::Canada),
            "https://api.opencovid.ca/summary?geo=can"
        );
        assert_eq!(
            config.timeseries_url(Region::Canada),
            "https://api.opencovid.ca/timeseries?geo=can"
        );
    }

    #[test]
    fn test_provincial_urls_use_loc() {
        let config = ApiConfig::builder().build();
        assert_eq!(
            config.summary_url(Region::BC),
            "https://api.opencovid.ca/summary?loc=BC"
        );
        assert_eq!(
            config.timeseries_url(Region::BC),
            "https://api.opencovid.ca/timeseries?loc=BC&ymd=true"
        );
    }

    #[test]
    fn test_custom_base_url() {
        let config = ApiConfig::builder().base_url("http://localhost:8080").build();
        assert_eq!(config.version_url(), "http://localhost:8080/version");
        assert!(config.summary_url(Region::QC).starts_with("http://localhost:8080/"));
    }

    #[test]
    fn test_version_response_parsing() {
        let json = r#"{ "version": "2023-09-12 23:00 EDT" }"#;
        let response: VersionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.version, "2023-09-12 23:00 EDT");
    }

    #[test]
    fn test_summary_response_parsing() {
        let json = r#"{
            "data": [{
                "cases": 100000,
                "deaths": 1000,
                "tests_completed": 500000,
                "vaccine_administration_total_doses": 2000000
            }]
        }"#;

        let response: SummaryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].cases, Some(100_000.0));
        assert_eq!(response.data[0].deaths, Some(1_000.0));
    }

    #[test]
    fn test_summary_response_empty_data() {
        let json = r#"{ "data": [] }"#;
        let response: SummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_summary_response_ignores_extra_fields() {
        let json = r#"{
            "data": [{
                "cases": 5,
                "cases_daily": 1,
                "hospitalizations": 2
            }]
        }"#;

        let response: SummaryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data[0].cases, Some(5.0));
        assert_eq!(response.data[0].deaths, None);
    }

    #[test]
    fn test_timeseries_response_parsing() {
        let json = r#"{
            "data": {
                "cases": [
                    { "date": "2021-01-01", "value": 10 },
                    { "date": "2021-01-02", "value": 12 }
                ]
            }
        }"#;

        let response: TimeseriesResponse = serde_json::from_str(json).unwrap();
        let cases = &response.data["cases"];
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].x, "2021-01-01");
        assert_eq!(cases[1].y, 12.0);
    }

    #[test]
    fn test_timeseries_response_missing_data_field() {
        let response: TimeseriesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
        assert!(Timeseries::from_raw(response.data).is_empty());
    }
}
