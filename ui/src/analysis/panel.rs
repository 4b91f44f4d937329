use api::{ApiClient, ApiError, FilePayload};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use futures_util::StreamExt;

use super::{submission, AnalysisPhase, AnalysisResultPanel, SelectedFile, UploadPanel};

#[derive(Debug, Clone)]
struct SubmitCommand {
    generation: u64,
    file: FilePayload,
}

const CONNECTION_MESSAGE: &str = "Something went wrong with the connection.";

/// The analyze flow: pick or drop a file, submit it, render the outcome.
///
/// Every submission carries a generation number; a response that comes back
/// after a newer submission started is dropped instead of overwriting the
/// newer result.
#[component]
pub fn AnalyzerPanel(client: ApiClient) -> Element {
    let selected = use_signal(|| Option::<SelectedFile>::None);
    let phase = use_signal(|| AnalysisPhase::Idle);
    let input_error = use_signal(|| Option::<String>::None);
    let generation = use_signal(|| 0u64);

    let submitter = use_coroutine(move |mut rx: UnboundedReceiver<SubmitCommand>| {
        let client = client.clone();
        let mut phase = phase;
        let generation = generation;

        async move {
            while let Some(command) = rx.next().await {
                phase.set(AnalysisPhase::Loading);

                let result = client.analyze(command.file).await;
                if *generation.peek() != command.generation {
                    // Superseded while in flight.
                    continue;
                }

                match result {
                    Ok(outcome) => phase.set(AnalysisPhase::Ready(outcome)),
                    Err(err @ ApiError::Status { .. }) => {
                        error!("analysis rejected: {err}");
                        phase.set(AnalysisPhase::Failed(err.to_string()));
                    }
                    Err(err) => {
                        error!("analysis request failed: {err}");
                        phase.set(AnalysisPhase::Failed(CONNECTION_MESSAGE.to_string()));
                    }
                }
            }
        }
    });

    let on_submit = {
        let mut input_error = input_error;
        let mut generation = generation;
        move |_| match submission(selected().as_ref()) {
            Ok(file) => {
                input_error.set(None);
                let next = generation() + 1;
                generation.set(next);
                submitter.send(SubmitCommand {
                    generation: next,
                    file,
                });
            }
            Err(message) => input_error.set(Some(message.to_string())),
        }
    };

    let busy = phase() == AnalysisPhase::Loading;

    rsx! {
        section { class: "analyzer",
            UploadPanel { selected }

            div { class: "analyzer__controls",
                button {
                    r#type: "button",
                    class: "button button--accent",
                    disabled: busy,
                    onclick: on_submit,
                    "Analyze report"
                }
                if let Some(message) = input_error() {
                    span { class: "analyzer__input-error", "⚠️ {message}" }
                }
            }

            match phase() {
                AnalysisPhase::Idle => rsx! {},
                AnalysisPhase::Loading => rsx! {
                    div { class: "analyzer__loading",
                        span { class: "analyzer__spinner" }
                        "Analyzing your report…"
                    }
                },
                AnalysisPhase::Failed(message) => rsx! {
                    div { class: "analyzer__error", "⚠️ {message}" }
                },
                AnalysisPhase::Ready(outcome) => rsx! {
                    AnalysisResultPanel { outcome }
                },
            }
        }
    }
}
