//! Wire types for the analysis and history endpoints.

use serde::{Deserialize, Serialize};

/// One lab test entry within a report.
///
/// Stored reports are not guaranteed complete; a reading may lack any field.
/// Decoding stays tolerant so one gap never rejects a whole history snapshot,
/// and downstream grouping drops entries with an empty name or value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(default)]
    pub test_name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl Reading {
    /// Statuses the server flags outside the reference range. The status set
    /// is open; anything unrecognized renders as neutral.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.status.as_str(), "High" | "Low")
    }
}

/// One dated collection of readings produced by a single analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub date: String,
    #[serde(default)]
    pub results: Vec<Reading>,
}

/// Structured analysis payload: a plain-language summary plus per-test rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredAnalysis {
    pub summary: String,
    #[serde(default)]
    pub results: Vec<Reading>,
}

/// Envelope returned by `POST /analyze`.
#[derive(Debug, Deserialize)]
pub(crate) struct AnalysisEnvelope {
    pub analysis: String,
}

/// Error envelope returned by the server on non-2xx analysis responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: String,
}

/// Typed rendering contract for the `analysis` field.
///
/// Deployments differ in what they put in that field: a JSON-encoded string
/// with `summary`/`results`, a markdown document, or free text. Classifying
/// once at the boundary keeps shape-sniffing out of the render path.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Structured(StructuredAnalysis),
    Markdown(String),
    Text(String),
}

impl AnalysisOutcome {
    pub fn classify(raw: &str) -> Self {
        if let Ok(structured) = serde_json::from_str::<StructuredAnalysis>(raw) {
            return Self::Structured(structured);
        }
        if looks_like_markdown(raw) {
            return Self::Markdown(raw.to_string());
        }
        Self::Text(raw.to_string())
    }

    /// Plain-text rendition used for clipboard copy and the desktop save path.
    pub fn as_plain_text(&self) -> String {
        match self {
            Self::Structured(analysis) => {
                let mut out = String::new();
                out.push_str(&analysis.summary);
                for reading in &analysis.results {
                    out.push('\n');
                    out.push_str(&reading.test_name);
                    out.push_str(": ");
                    out.push_str(&reading.value);
                    if let Some(unit) = &reading.unit {
                        out.push(' ');
                        out.push_str(unit);
                    }
                    if !reading.status.is_empty() {
                        out.push_str(" (");
                        out.push_str(&reading.status);
                        out.push(')');
                    }
                }
                out
            }
            Self::Markdown(text) | Self::Text(text) => text.clone(),
        }
    }
}

fn looks_like_markdown(raw: &str) -> bool {
    raw.lines().any(|line| {
        let trimmed = line.trim_start();
        trimmed.starts_with("# ")
            || trimmed.starts_with("## ")
            || trimmed.starts_with("### ")
            || trimmed.starts_with("- ")
            || trimmed.starts_with("* ")
    }) || raw.contains("**")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_detects_structured_payload() {
        let raw = r#"{"summary":"All good","results":[{"test_name":"Hemoglobin","value":"13.5","unit":"g/dL","status":"Normal"}]}"#;
        match AnalysisOutcome::classify(raw) {
            AnalysisOutcome::Structured(analysis) => {
                assert_eq!(analysis.summary, "All good");
                assert_eq!(analysis.results.len(), 1);
                assert_eq!(analysis.results[0].test_name, "Hemoglobin");
                assert_eq!(analysis.results[0].unit.as_deref(), Some("g/dL"));
            }
            other => panic!("expected structured outcome, got {other:?}"),
        }
    }

    #[test]
    fn classify_detects_markdown() {
        let raw = "## Summary\n\n- Hemoglobin slightly **low**\n- Everything else normal";
        assert!(matches!(
            AnalysisOutcome::classify(raw),
            AnalysisOutcome::Markdown(_)
        ));
    }

    #[test]
    fn classify_falls_back_to_text() {
        let raw = "Your report looks broadly normal.\nStay hydrated.";
        assert!(matches!(
            AnalysisOutcome::classify(raw),
            AnalysisOutcome::Text(_)
        ));
    }

    #[test]
    fn malformed_json_is_not_structured() {
        // A JSON object missing `summary` must not decode as structured.
        let raw = r#"{"results":[]}"#;
        assert!(matches!(
            AnalysisOutcome::classify(raw),
            AnalysisOutcome::Text(_)
        ));
    }

    #[test]
    fn plain_text_rendition_includes_rows() {
        let analysis = StructuredAnalysis {
            summary: "Summary".into(),
            results: vec![Reading {
                test_name: "Glucose".into(),
                value: "98".into(),
                unit: Some("mg/dL".into()),
                status: "Normal".into(),
            }],
        };
        let text = AnalysisOutcome::Structured(analysis).as_plain_text();
        assert!(text.contains("Glucose: 98 mg/dL (Normal)"));
    }

    #[test]
    fn reading_status_classification() {
        let mut reading = Reading {
            test_name: "TSH".into(),
            value: "6.1".into(),
            unit: None,
            status: "High".into(),
        };
        assert!(reading.is_out_of_range());
        reading.status = "Normal".into();
        assert!(!reading.is_out_of_range());
        reading.status = "Borderline".into();
        assert!(!reading.is_out_of_range());
    }

    #[test]
    fn report_decodes_with_missing_optional_fields() {
        let raw = r#"[{"date":"2024-01-01","results":[{"test_name":"WBC","value":"5.2"}]}]"#;
        let reports: Vec<Report> = serde_json::from_str(raw).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].results[0].unit, None);
        assert_eq!(reports[0].results[0].status, "");
    }

    #[test]
    fn history_decode_tolerates_readings_with_absent_fields() {
        // One reading omits `value`, another omits `test_name`; the snapshot
        // must still decode so the intact readings chart.
        let raw = r#"[
            {"date":"2024-01-01","results":[
                {"test_name":"Hemoglobin","value":"13.5","status":"Normal"},
                {"test_name":"Vitamin D","status":"Low"},
                {"value":"98","status":"Normal"}
            ]}
        ]"#;
        let reports: Vec<Report> = serde_json::from_str(raw).unwrap();
        assert_eq!(reports[0].results.len(), 3);
        assert_eq!(reports[0].results[1].value, "");
        assert_eq!(reports[0].results[2].test_name, "");
    }
}
