use serde::Deserialize;

use super::metric::Metric;

/// Cumulative totals for one region, as returned by a `/summary` row.
///
/// Every field is optional: the API omits metrics it has no data for, and
/// an empty response leaves the whole record at its default (all blank).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SummaryRecord {
    pub cases: Option<f64>,
    pub deaths: Option<f64>,
    pub tests_completed: Option<f64>,
    pub vaccine_administration_total_doses: Option<f64>,
}

impl SummaryRecord {
    /// Raw cumulative value for a metric, if the API reported one.
    pub fn raw(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Cases => self.cases,
            Metric::Deaths => self.deaths,
            Metric::TestsCompleted => self.tests_completed,
            Metric::VaccineTotalDoses => self.vaccine_administration_total_doses,
        }
    }

    /// Locale-style formatted value for a metric (thousands separators),
    /// or `None` when the metric is absent and the card should render blank.
    pub fn formatted(&self, metric: Metric) -> Option<String> {
        self.raw(metric).map(format_grouped)
    }
}

/// Formats a count with comma thousands separators: `1234567` → `"1,234,567"`.
///
/// The API reports cumulative counts, so values are whole numbers; any
/// fractional part is dropped rather than displayed.
pub fn format_grouped(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if negative { format!("-{out}") } else { out }
}
