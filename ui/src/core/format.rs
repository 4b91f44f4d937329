//! Formatting helpers for presenting readings and reports.

use api::Reading;

/// CSS class for a reading's status cell.
pub fn status_class(reading: &Reading) -> &'static str {
    if reading.is_out_of_range() {
        "status-warning"
    } else {
        "status-normal"
    }
}

/// Unit cell text; the server omits units for dimensionless tests.
pub fn unit_label(reading: &Reading) -> String {
    reading.unit.clone().unwrap_or_else(|| "-".to_string())
}

/// Human file size for the upload preview.
pub fn format_file_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let bytes = bytes as f64;
    if bytes < KIB {
        format!("{bytes:.0} B")
    } else if bytes < KIB * KIB {
        format!("{:.1} KiB", bytes / KIB)
    } else {
        format!("{:.1} MiB", bytes / (KIB * KIB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(status: &str, unit: Option<&str>) -> Reading {
        Reading {
            test_name: "Hemoglobin".into(),
            value: "13.5".into(),
            unit: unit.map(String::from),
            status: status.into(),
        }
    }

    #[test]
    fn warning_class_for_out_of_range() {
        assert_eq!(status_class(&reading("High", None)), "status-warning");
        assert_eq!(status_class(&reading("Low", None)), "status-warning");
        assert_eq!(status_class(&reading("Normal", None)), "status-normal");
    }

    #[test]
    fn unit_falls_back_to_dash() {
        assert_eq!(unit_label(&reading("Normal", Some("g/dL"))), "g/dL");
        assert_eq!(unit_label(&reading("Normal", None)), "-");
    }

    #[test]
    fn file_sizes_scale() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KiB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
