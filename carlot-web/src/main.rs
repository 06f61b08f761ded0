use tracing::{info, Level};

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    info!("Starting carlot web");
    dioxus::launch(carlot_web::App);
}
