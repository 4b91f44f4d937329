use api::ApiClient;
use dioxus::prelude::*;

use crate::history::HistoryDashboard;

/// History page: one trend chart per lab-test metric across every stored
/// report.
#[component]
pub fn History() -> Element {
    let client = use_context::<ApiClient>();

    rsx! {
        section { class: "page page-history",
            h1 { "History" }
            p { "Track how each metric has moved across your analyzed reports." }

            HistoryDashboard { client }
        }
    }
}
