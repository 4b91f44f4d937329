//! Per-metric series aggregation across historical reports.
//!
//! Reports arrive as a flat list; charts need one numeric series per test
//! name. Grouping preserves encounter order on both axes: series appear in
//! the order their test name is first seen, and points keep report order
//! (chronological only if the server already sorted — no re-sort here).

use std::collections::HashMap;

use api::Report;

/// Outcome of sanitizing a raw reading value.
///
/// Values come with unit suffixes ("12.3 g/dL") or comparators ("<5"). The
/// sanitizer keeps digits and decimal points, then parses; anything that
/// does not yield a finite number is an explicit `Unparseable`, never a NaN
/// smuggled into a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedValue {
    Numeric(f64),
    Unparseable,
}

impl ParsedValue {
    pub fn parse(raw: &str) -> Self {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Numeric(value),
            _ => Self::Unparseable,
        }
    }

    pub fn numeric(self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(value),
            Self::Unparseable => None,
        }
    }
}

/// One dated numeric observation within a metric series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: String,
    pub value: f64,
}

/// Chronologically ordered numeric series for one test name.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub name: String,
    pub points: Vec<TrendPoint>,
}

/// Groups every parseable reading by test name.
///
/// Readings with an empty name or value are skipped, as are readings whose
/// cleaned value fails to parse. Every returned series has at least one
/// point.
pub fn group_series(reports: &[Report]) -> Vec<MetricSeries> {
    let mut order: Vec<MetricSeries> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for report in reports {
        for reading in &report.results {
            if reading.test_name.is_empty() || reading.value.is_empty() {
                continue;
            }
            let Some(value) = ParsedValue::parse(&reading.value).numeric() else {
                continue;
            };

            let slot = *index
                .entry(reading.test_name.clone())
                .or_insert_with(|| {
                    order.push(MetricSeries {
                        name: reading.test_name.clone(),
                        points: Vec::new(),
                    });
                    order.len() - 1
                });
            order[slot].points.push(TrendPoint {
                date: report.date.clone(),
                value,
            });
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Reading;

    fn reading(name: &str, value: &str) -> Reading {
        Reading {
            test_name: name.into(),
            value: value.into(),
            unit: None,
            status: "Normal".into(),
        }
    }

    fn report(date: &str, results: Vec<Reading>) -> Report {
        Report {
            date: date.into(),
            results,
        }
    }

    #[test]
    fn parse_strips_unit_suffix() {
        assert_eq!(ParsedValue::parse("12.3 g/dL"), ParsedValue::Numeric(12.3));
    }

    #[test]
    fn parse_strips_comparator_prefix() {
        assert_eq!(ParsedValue::parse("<5"), ParsedValue::Numeric(5.0));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(ParsedValue::parse("N/A"), ParsedValue::Unparseable);
        assert_eq!(ParsedValue::parse(""), ParsedValue::Unparseable);
        assert_eq!(ParsedValue::parse("1.2.3"), ParsedValue::Unparseable);
    }

    #[test]
    fn parse_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(ParsedValue::parse("13.5 g/dL"), ParsedValue::Numeric(13.5));
        }
    }

    #[test]
    fn groups_across_reports_in_order() {
        let reports = vec![
            report("2024-01-01", vec![reading("Hemoglobin", "13.5 g/dL")]),
            report("2024-02-01", vec![reading("Hemoglobin", "14.1 g/dL")]),
        ];

        let series = group_series(&reports);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Hemoglobin");
        assert_eq!(
            series[0].points,
            vec![
                TrendPoint {
                    date: "2024-01-01".into(),
                    value: 13.5,
                },
                TrendPoint {
                    date: "2024-02-01".into(),
                    value: 14.1,
                },
            ]
        );
    }

    #[test]
    fn series_order_is_first_encounter() {
        let reports = vec![
            report(
                "2024-01-01",
                vec![reading("Glucose", "98"), reading("Hemoglobin", "13.5")],
            ),
            report(
                "2024-02-01",
                vec![reading("Hemoglobin", "14.1"), reading("Glucose", "91")],
            ),
        ];

        let series = group_series(&reports);
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Glucose", "Hemoglobin"]);
    }

    #[test]
    fn unparseable_and_blank_readings_are_dropped() {
        let reports = vec![report(
            "2024-01-01",
            vec![
                reading("Hemoglobin", "13.5"),
                reading("Vitamin D", "N/A"),
                reading("", "4.2"),
                reading("Ferritin", ""),
            ],
        )];

        let series = group_series(&reports);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Hemoglobin");
    }

    #[test]
    fn empty_history_yields_no_series() {
        assert!(group_series(&[]).is_empty());
    }
}
