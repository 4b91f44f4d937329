use api::ApiClient;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_util::StreamExt;

use super::charts::{MetricChart, VIEW_HEIGHT, VIEW_WIDTH};
use super::{HistoryPhase, HistorySession};

#[derive(Debug, Clone)]
enum HistoryCommand {
    Load,
}

/// History view body: fetches the report list once on mount, then rebuilds
/// the whole chart set through `HistorySession::replace` on every load.
#[component]
pub fn HistoryDashboard(client: ApiClient) -> Element {
    let session = use_signal(HistorySession::default);
    let phase = use_signal(|| HistoryPhase::Idle);

    let loader = use_coroutine(move |mut rx: UnboundedReceiver<HistoryCommand>| {
        let client = client.clone();
        let mut session = session;
        let mut phase = phase;

        async move {
            while let Some(HistoryCommand::Load) = rx.next().await {
                phase.set(HistoryPhase::Loading);

                match client.history().await {
                    Ok(reports) if reports.is_empty() => {
                        session.with_mut(|s| s.clear());
                        phase.set(HistoryPhase::Empty);
                    }
                    Ok(reports) => {
                        info!("history loaded: {} reports", reports.len());
                        session.with_mut(|s| s.replace(reports));
                        phase.set(HistoryPhase::Ready);
                    }
                    Err(err) => {
                        error!("history load failed: {err}");
                        phase.set(HistoryPhase::Failed(err.to_string()));
                    }
                }
            }
        }
    });

    use_effect(move || {
        loader.send(HistoryCommand::Load);
    });

    let snapshot = session();
    let report_count = snapshot.reports().len();

    rsx! {
        section { class: "history-card",
            div { class: "history-card__header",
                h2 { "Trends" }
                if report_count > 0 {
                    span { class: "history-card__meta", "{report_count} reports" }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: phase() == HistoryPhase::Loading,
                    onclick: move |_| loader.send(HistoryCommand::Load),
                    "Refresh"
                }
            }

            match phase() {
                HistoryPhase::Idle | HistoryPhase::Loading => rsx! {
                    p { class: "history-card__placeholder", "Loading history…" }
                },
                HistoryPhase::Empty => rsx! {
                    p { class: "history-card__placeholder",
                        "No history yet. Analyze a report first and it will show up here."
                    }
                },
                HistoryPhase::Failed(message) => rsx! {
                    div { class: "history-card__error",
                        p { "⚠️ Couldn't load history: {message}" }
                        button {
                            r#type: "button",
                            class: "button",
                            onclick: move |_| loader.send(HistoryCommand::Load),
                            "Try again"
                        }
                    }
                },
                HistoryPhase::Ready => rsx! {
                    div {
                        class: "history__charts",
                        key: "{snapshot.generation()}",
                        for chart in snapshot.charts().iter().cloned() {
                            TrendChartCard { chart }
                        }
                    }
                },
            }
        }
    }
}

/// One metric's trend: header plus an inline SVG line chart. The y axis is
/// padded around the observed range, never anchored at zero.
#[component]
pub fn TrendChartCard(chart: MetricChart) -> Element {
    // Left edge for gridlines and value labels.
    let axis_x = 40.0;

    rsx! {
        div { class: "trend-chart",
            div { class: "trend-chart__header",
                h3 { class: "trend-chart__title", "{chart.metric}" }
                span { class: "trend-chart__meta",
                    "{chart.points.len()} readings"
                }
            }
            svg {
                class: "trend-chart__plot",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",
                role: "img",
                "aria-label": "Trend for {chart.metric}",

                for (y, label) in chart.y_ticks.iter() {
                    line {
                        class: "trend-chart__gridline",
                        x1: "{axis_x}",
                        x2: "{VIEW_WIDTH}",
                        y1: "{y}",
                        y2: "{y}",
                    }
                    text {
                        class: "trend-chart__tick",
                        x: "{axis_x - 6.0}",
                        y: "{y + 4.0}",
                        text_anchor: "end",
                        "{label}"
                    }
                }

                path { class: "trend-chart__area", d: "{chart.area_path}" }
                path { class: "trend-chart__line", d: "{chart.line_path}" }

                for point in chart.points.iter() {
                    circle {
                        class: "trend-chart__point",
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "3.5",
                    }
                }

                for (x, label) in chart.x_labels.iter() {
                    text {
                        class: "trend-chart__tick trend-chart__tick--date",
                        x: "{x}",
                        y: "{VIEW_HEIGHT - 8.0}",
                        text_anchor: "middle",
                        "{label}"
                    }
                }
            }
        }
    }
}
