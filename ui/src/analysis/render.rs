use api::AnalysisOutcome;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::core::format::{status_class, unit_label};

use super::markdown::Markdown;

#[derive(Clone, Debug, PartialEq)]
enum ActionStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Rendered analysis result plus the copy and print/save conveniences.
#[component]
pub fn AnalysisResultPanel(outcome: AnalysisOutcome) -> Element {
    let status = use_signal(|| ActionStatus::Idle);

    let copy_handler = {
        let payload = outcome.as_plain_text();
        let mut status_signal = status;
        move |_| {
            let payload = payload.clone();
            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                platform::spawn_future(async move {
                    match copy_to_clipboard(payload).await {
                        Ok(()) => status_signal
                            .set(ActionStatus::Done("Copied to clipboard".to_string())),
                        Err(err) => status_signal.set(ActionStatus::Error(err)),
                    }
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                match futures::executor::block_on(copy_to_clipboard(payload)) {
                    Ok(()) => {
                        status_signal.set(ActionStatus::Done("Copied to clipboard".to_string()))
                    }
                    Err(err) => status_signal.set(ActionStatus::Error(err)),
                }
            }
        }
    };

    let print_handler = {
        let payload = outcome.as_plain_text();
        let mut status_signal = status;
        move |_| match print_or_save(&payload) {
            Ok(Some(path)) => status_signal.set(ActionStatus::Done(format!("Saved to {path}"))),
            Ok(None) => status_signal.set(ActionStatus::Idle),
            Err(err) => status_signal.set(ActionStatus::Error(err)),
        }
    };

    let feedback = match status() {
        ActionStatus::Idle => None,
        ActionStatus::Done(message) => Some((
            "result-card__meta result-card__meta--success",
            format!("✅ {message}"),
        )),
        ActionStatus::Error(message) => Some((
            "result-card__meta result-card__meta--error",
            format!("⚠️ {message}"),
        )),
    };

    rsx! {
        section { class: "result-card",
            div { class: "result-card__header",
                h2 { "Analysis" }
                div { class: "result-card__actions",
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: copy_handler,
                        "Copy"
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: print_handler,
                        if cfg!(target_arch = "wasm32") { "Print" } else { "Save" }
                    }
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }

            {render_outcome(&outcome)}
        }
    }
}

fn render_outcome(outcome: &AnalysisOutcome) -> Element {
    match outcome {
        AnalysisOutcome::Structured(analysis) => rsx! {
            div { class: "summary-box",
                h3 { "🩺 Summary" }
                p { "{analysis.summary}" }
            }
            div { class: "table-container",
                table { class: "report-table",
                    thead {
                        tr {
                            th { "Test Name" }
                            th { "Value" }
                            th { "Unit" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for reading in analysis.results.iter() {
                            tr {
                                td { "{reading.test_name}" }
                                td { "{reading.value}" }
                                td { "{unit_label(reading)}" }
                                td { class: "{status_class(reading)}", "{reading.status}" }
                            }
                        }
                    }
                }
            }
        },
        AnalysisOutcome::Markdown(text) => rsx! {
            Markdown { source: "{text}" }
        },
        AnalysisOutcome::Text(text) => rsx! {
            div { class: "result-card__text",
                for line in text.lines() {
                    p { "{line}" }
                }
            }
        },
    }
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err("clipboard copy blocked".into())
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

/// Web prints the current page; desktop saves a text rendition instead and
/// reports the path it landed at.
fn print_or_save(payload: &str) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = payload;
        web_sys::window()
            .ok_or("window unavailable")?
            .print()
            .map_err(|_| "print dialog blocked".to_string())?;
        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let dirs = directories::ProjectDirs::from("com", "Vitalens", "Vitalens")
            .ok_or("unable to determine report directory")?;
        let dir = dirs.data_dir().join("reports");
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;

        let path = dir.join(format!("vitalens-analysis-{}.txt", timestamp_slug()));
        fs::write(&path, payload).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "report".into())
}
