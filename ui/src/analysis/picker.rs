use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::format::format_file_size;

use super::SelectedFile;

/// Drag/drop zone and file picker. Both inputs converge on the same capture
/// path: read the first file through the engine, build the preview, publish
/// it on the shared signal.
#[component]
pub fn UploadPanel(selected: Signal<Option<SelectedFile>>) -> Element {
    let hovering = use_signal(|| false);

    let drop_class = if hovering() {
        "drop-area drop-area--highlight"
    } else {
        "drop-area"
    };

    let current = selected();

    rsx! {
        div {
            class: "{drop_class}",
            ondragover: move |evt| evt.prevent_default(),
            ondragenter: {
                let mut hovering = hovering;
                move |evt: DragEvent| {
                    evt.prevent_default();
                    hovering.set(true);
                }
            },
            ondragleave: {
                let mut hovering = hovering;
                move |_| hovering.set(false)
            },
            ondrop: {
                let mut hovering = hovering;
                move |evt: DragEvent| {
                    evt.prevent_default();
                    hovering.set(false);
                    if let Some(engine) = evt.files() {
                        capture_first_file(engine, selected);
                    }
                }
            },

            p { class: "drop-area__hint", "Drag a report here, or" }
            label { class: "button button--primary drop-area__browse",
                "Browse files"
                input {
                    r#type: "file",
                    class: "drop-area__input",
                    accept: "image/*,.pdf",
                    onchange: move |evt| {
                        if let Some(engine) = evt.files() {
                            capture_first_file(engine, selected);
                        }
                    },
                }
            }
        }

        if let Some(file) = current {
            div { class: "file-preview",
                if let Some(thumbnail) = file.preview.as_ref() {
                    img { class: "file-preview__thumbnail", src: "{thumbnail}", alt: "{file.name}" }
                }
                div { class: "file-preview__meta",
                    span { class: "file-preview__name", "{file.name}" }
                    span { class: "file-preview__size", "{format_file_size(file.bytes.len())}" }
                }
            }
        }
    }
}

fn capture_first_file(engine: Arc<dyn FileEngine>, mut selected: Signal<Option<SelectedFile>>) {
    spawn(async move {
        let names = engine.files();
        let Some(name) = names.first().cloned() else {
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => selected.set(Some(SelectedFile::new(name, bytes))),
            None => warn!("could not read dropped file {name}"),
        }
    });
}
