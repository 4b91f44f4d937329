//! History view state: one session object owning the report snapshot and the
//! charts derived from it.

mod dashboard;
pub use dashboard::HistoryDashboard;

pub mod charts;
pub mod series;

use api::Report;

use charts::MetricChart;
use series::group_series;

/// Owner of the loaded history snapshot and every live chart built from it.
///
/// Replacing the snapshot is a single operation: prior charts are dropped
/// before the new set is built, so at no point do two generations coexist.
/// `generation` keys the rendered subtree, forcing a remount per load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySession {
    reports: Vec<Report>,
    charts: Vec<MetricChart>,
    generation: u64,
}

impl HistorySession {
    /// Atomically swaps in a new snapshot and rebuilds all charts.
    pub fn replace(&mut self, reports: Vec<Report>) {
        self.charts.clear();
        self.reports = reports;
        self.charts = group_series(&self.reports)
            .iter()
            .filter_map(MetricChart::from_series)
            .collect();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Drops the snapshot and every chart with it.
    pub fn clear(&mut self) {
        self.reports.clear();
        self.charts.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn charts(&self) -> &[MetricChart] {
        &self.charts
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Where the history view currently stands. Load failures are surfaced here
/// rather than swallowed; the message mirrors what the analyze path shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HistoryPhase {
    #[default]
    Idle,
    Loading,
    Empty,
    Ready,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Reading;

    fn report(date: &str, rows: &[(&str, &str)]) -> Report {
        Report {
            date: date.into(),
            results: rows
                .iter()
                .map(|(name, value)| Reading {
                    test_name: (*name).to_string(),
                    value: (*value).to_string(),
                    unit: None,
                    status: "Normal".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn replace_builds_one_chart_per_valid_metric() {
        let mut session = HistorySession::default();
        session.replace(vec![
            report("2024-01-01", &[("Hemoglobin", "13.5 g/dL"), ("Vitamin D", "N/A")]),
            report("2024-02-01", &[("Hemoglobin", "14.1 g/dL"), ("Glucose", "98")]),
        ]);

        let metrics: Vec<&str> = session.charts().iter().map(|c| c.metric.as_str()).collect();
        assert_eq!(metrics, vec!["Hemoglobin", "Glucose"]);
    }

    #[test]
    fn replace_tears_down_previous_generation() {
        let mut session = HistorySession::default();
        session.replace(vec![report("2024-01-01", &[("Hemoglobin", "13.5")])]);
        let first_generation = session.generation();

        session.replace(vec![report("2024-02-01", &[("Glucose", "98")])]);

        assert_eq!(session.charts().len(), 1);
        assert_eq!(session.charts()[0].metric, "Glucose");
        assert_ne!(session.generation(), first_generation);
    }

    #[test]
    fn clear_empties_everything() {
        let mut session = HistorySession::default();
        session.replace(vec![report("2024-01-01", &[("Hemoglobin", "13.5")])]);
        session.clear();
        assert!(session.is_empty());
        assert!(session.charts().is_empty());
    }

    #[test]
    fn empty_snapshot_produces_no_charts() {
        let mut session = HistorySession::default();
        session.replace(Vec::new());
        assert!(session.charts().is_empty());
        assert!(session.is_empty());
    }
}
