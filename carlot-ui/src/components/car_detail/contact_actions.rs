use crate::components::icons::{MessageCircleIcon, PhoneIcon};
use dioxus::prelude::*;

/// Call and WhatsApp buttons. Links are built by the caller.
#[component]
pub fn ContactActions(call_href: String, whatsapp_href: String) -> Element {
    rsx! {
        div { class: "mt-6 space-y-3",
            a {
                href: "{call_href}",
                class: "flex items-center justify-center gap-2 bg-blue-600 hover:bg-blue-700 text-white py-3 rounded transition-colors",
                PhoneIcon { class: "w-4 h-4" }
                "Call Now"
            }
            a {
                href: "{whatsapp_href}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "flex items-center justify-center gap-2 bg-green-500 hover:bg-green-600 text-white py-3 rounded transition-colors",
                MessageCircleIcon { class: "w-4 h-4" }
                "WhatsApp"
            }
        }
    }
}
