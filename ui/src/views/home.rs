use api::ApiClient;
use dioxus::prelude::*;

use crate::analysis::AnalyzerPanel;

/// Upload-and-analyze page.
#[component]
pub fn Home() -> Element {
    let client = use_context::<ApiClient>();

    rsx! {
        section { class: "page page-home",
            h1 { "Understand your lab report" }
            p {
                "Drop in a blood report photo or PDF and get a plain-language breakdown "
                "of what the numbers mean."
            }

            AnalyzerPanel { client }
        }
    }
}
