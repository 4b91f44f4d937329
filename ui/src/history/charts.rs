//! Chart geometry for metric trend lines.
//!
//! Everything here is plain data: a `MetricChart` holds precomputed SVG path
//! strings and tick positions for one metric, and the view layer only prints
//! them into an `svg` element. Keeping the mapping pure makes the teardown /
//! rebuild invariant testable without a DOM.

use super::series::MetricSeries;

pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 220.0;

const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 14.0;
const PAD_BOTTOM: f64 = 30.0;

const Y_TICKS: usize = 4;

/// One plotted observation, in view-box pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub date: String,
    pub value: f64,
}

/// A fully shaped trend chart for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricChart {
    pub metric: String,
    pub points: Vec<PlotPoint>,
    pub line_path: String,
    pub area_path: String,
    /// (y position, label) pairs for the value axis.
    pub y_ticks: Vec<(f64, String)>,
    /// (x position, label) pairs for the date axis.
    pub x_labels: Vec<(f64, String)>,
    pub y_min: f64,
    pub y_max: f64,
}

impl MetricChart {
    /// Shapes one series into a chart. Empty series produce no chart.
    pub fn from_series(series: &MetricSeries) -> Option<Self> {
        if series.points.is_empty() {
            return None;
        }

        let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
        let (y_min, y_max) = padded_domain(&values);

        let plot_width = VIEW_WIDTH - PAD_LEFT - PAD_RIGHT;
        let plot_height = VIEW_HEIGHT - PAD_TOP - PAD_BOTTOM;

        let x_at = |index: usize| -> f64 {
            if series.points.len() == 1 {
                PAD_LEFT + plot_width / 2.0
            } else {
                PAD_LEFT + plot_width * index as f64 / (series.points.len() - 1) as f64
            }
        };
        let y_at = |value: f64| -> f64 {
            let span = y_max - y_min;
            PAD_TOP + plot_height * (1.0 - (value - y_min) / span)
        };

        let points: Vec<PlotPoint> = series
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| PlotPoint {
                x: x_at(index),
                y: y_at(point.value),
                date: point.date.clone(),
                value: point.value,
            })
            .collect();

        let mut line_path = String::new();
        for (index, point) in points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            line_path.push_str(&format!("{command}{:.1},{:.1} ", point.x, point.y));
        }
        let line_path = line_path.trim_end().to_string();

        let baseline = PAD_TOP + plot_height;
        let first = &points[0];
        let last = &points[points.len() - 1];
        let area_path = format!(
            "{} L{:.1},{baseline:.1} L{:.1},{baseline:.1} Z",
            line_path, last.x, first.x
        );

        let y_ticks = (0..=Y_TICKS)
            .map(|step| {
                let value = y_min + (y_max - y_min) * step as f64 / Y_TICKS as f64;
                (y_at(value), format_tick(value))
            })
            .collect();

        let x_labels = label_indices(points.len())
            .into_iter()
            .map(|index| (points[index].x, points[index].date.clone()))
            .collect();

        Some(Self {
            metric: series.name.clone(),
            points,
            line_path,
            area_path,
            y_ticks,
            x_labels,
            y_min,
            y_max,
        })
    }
}

/// Value-axis domain with headroom. Never snapped to zero: small
/// physiological swings must stay visible.
fn padded_domain(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.08
    } else {
        (max.abs() * 0.05).max(1.0)
    };
    (min - pad, max + pad)
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Picks at most five evenly spread label positions so long histories don't
/// collide on the date axis.
fn label_indices(count: usize) -> Vec<usize> {
    const MAX_LABELS: usize = 5;
    if count <= MAX_LABELS {
        return (0..count).collect();
    }
    (0..MAX_LABELS)
        .map(|step| step * (count - 1) / (MAX_LABELS - 1))
        .collect()
}
