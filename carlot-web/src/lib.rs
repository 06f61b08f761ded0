pub mod api;
pub mod pages;

use carlot_common::ContactConfig;
use dioxus::prelude::*;
use pages::{CarDetails, Home, PageNotFound};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/cars/:car_id")]
    CarDetails { car_id: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(api::resolve_api_config);
    use_context_provider(ContactConfig::from_build_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
