//! Error display component

use dioxus::prelude::*;

/// Full-height message used when the page has nothing else to show
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center text-gray-600",
            "data-testid": "page-error",
            "{message}"
        }
    }
}
