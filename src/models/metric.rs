/// The four COVID-19 metrics the dashboard tracks.
///
/// The OpenCOVID summary and timeseries responses expose these as JSON
/// fields keyed by `key()`. Keeping them as an enum (rather than iterating
/// whatever keys the API returns) pins the dashboard to a known shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cases,
    Deaths,
    TestsCompleted,
    VaccineTotalDoses,
}

impl Metric {
    /// The JSON field name used by both the summary and timeseries endpoints.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Cases => "cases",
            Metric::Deaths => "deaths",
            Metric::TestsCompleted => "tests_completed",
            Metric::VaccineTotalDoses => "vaccine_administration_total_doses",
        }
    }

    /// Legend label shown on the chart. Matches the raw API key.
    pub fn label(&self) -> &'static str {
        self.key()
    }

    /// Heading shown on the summary card.
    ///
    /// "Total Recovered" reads from `tests_completed`. The upstream
    /// dashboard shipped with this mapping, so it is kept as observed.
    pub fn card_title(&self) -> &'static str {
        match self {
            Metric::Cases => "Total Cases",
            Metric::Deaths => "Total Deaths",
            Metric::TestsCompleted => "Total Recovered",
            Metric::VaccineTotalDoses => "Total Vaccinated",
        }
    }

    /// Fixed line color for this metric on the chart.
    pub fn color(&self) -> &'static str {
        match self {
            Metric::Cases => "red",
            Metric::Deaths => "grey",
            Metric::TestsCompleted => "blue",
            Metric::VaccineTotalDoses => "green",
        }
    }

    /// All metrics, in chart/legend order.
    pub fn all() -> &'static [Metric] {
        &[
            Metric::Cases,
            Metric::Deaths,
            Metric::TestsCompleted,
            Metric::VaccineTotalDoses,
        ]
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
