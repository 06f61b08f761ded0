use crate::components::icons::{FuelIcon, GaugeIcon, MapPinIcon, SettingsIcon, UsersIcon};
use carlot_common::InfoField;
use dioxus::prelude::*;

/// Two-column grid of key facts
#[component]
pub fn InfoGrid(fields: Vec<InfoField>) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 gap-4 mt-6 text-sm",
            for field in fields {
                InfoTile {
                    key: "{field.label}",
                    label: field.label.to_string(),
                    value: field.value,
                }
            }
        }
    }
}

/// One labelled value
#[component]
pub fn InfoTile(label: String, value: String) -> Element {
    rsx! {
        div { class: "bg-gray-100 p-3 rounded",
            p { class: "flex items-center gap-1.5 text-gray-500",
                {info_icon(&label)}
                "{label}"
            }
            p { class: "font-semibold", "{value}" }
        }
    }
}

fn info_icon(label: &str) -> Element {
    match label {
        "Fuel" => rsx! { FuelIcon { class: "w-3.5 h-3.5" } },
        "Mileage" => rsx! { GaugeIcon { class: "w-3.5 h-3.5" } },
        "Transmission" => rsx! { SettingsIcon { class: "w-3.5 h-3.5" } },
        "Seats" | "Owners" => rsx! { UsersIcon { class: "w-3.5 h-3.5" } },
        "Location" => rsx! { MapPinIcon { class: "w-3.5 h-3.5" } },
        _ => rsx! {},
    }
}
