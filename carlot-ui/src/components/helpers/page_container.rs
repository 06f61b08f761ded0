use dioxus::prelude::*;

/// Grey full-height page background with centred content column
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-100", {children} }
    }
}
