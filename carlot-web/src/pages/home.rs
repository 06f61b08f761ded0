use carlot_ui::ErrorDisplay;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        ErrorDisplay { message: "Select a car to see its details." }
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        ErrorDisplay { message: format!("Page not found: /{path}") }
    }
}
