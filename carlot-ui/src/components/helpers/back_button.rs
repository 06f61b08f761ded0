//! Back button component

use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;

/// Back link shown above the page; navigation is left to the caller
#[component]
pub fn BackButton(
    #[props(default = "Back".to_string())] text: String,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "bg-white border-b",
            div { class: "max-w-6xl mx-auto p-4",
                button {
                    class: "flex items-center gap-2 text-blue-600 hover:text-blue-800 transition-colors",
                    "data-testid": "back-button",
                    onclick: move |_| on_click.call(()),
                    ArrowLeftIcon { class: "w-[18px] h-[18px]" }
                    "{text}"
                }
            }
        }
    }
}
