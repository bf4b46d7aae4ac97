use std::collections::HashMap;

use serde::Deserialize;

use super::metric::Metric;

/// One observation in a metric's time series.
///
/// `x` is the report date exactly as the API sent it; the API guarantees
/// chronological order, so points are never re-sorted here. `y` is the
/// daily value for that date.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SeriesPoint {
    #[serde(rename = "date")]
    pub x: String,
    #[serde(rename = "value")]
    pub y: f64,
}

/// An ordered sequence of points for one metric, ready for the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub metric: Metric,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// The series' empty shape, used when the API has no data for a metric.
    pub fn empty(metric: Metric) -> Self {
        Self {
            metric,
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Y values in source order, for the chart series data.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// The full set of per-metric series for the selected region.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeseries {
    series: Vec<Series>,
}

impl Default for Timeseries {
    fn default() -> Self {
        Self {
            series: Metric::all().iter().map(|m| Series::empty(*m)).collect(),
        }
    }
}

impl Timeseries {
    /// Builds the series collection from the raw `/timeseries` payload,
    /// one series per known metric. Metrics missing from the payload get
    /// an empty series; unknown payload keys are ignored.
    pub fn from_raw(mut raw: HashMap<String, Vec<SeriesPoint>>) -> Self {
        let series = Metric::all()
            .iter()
            .map(|metric| {
                raw.remove(metric.key()).map_or_else(
                    || Series::empty(*metric),
                    |points| Series {
                        metric: *metric,
                        points,
                    },
                )
            })
            .collect();

        Self { series }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Series::is_empty)
    }

    /// Category axis labels: the dates of the first non-empty series.
    ///
    /// All four series come from the same daily report, so their date
    /// ranges coincide; the first populated one stands in for the axis.
    pub fn x_labels(&self) -> Vec<String> {
        self.series
            .iter()
            .find(|s| !s.is_empty())
            .map(|s| s.points.iter().map(|p| p.x.clone()).collect())
            .unwrap_or_default()
    }
}
