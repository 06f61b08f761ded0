use crate::api;
use carlot_common::{ApiConfig, ContactConfig, LoadTracker};
use carlot_ui::stores::{CarDetailState, CarDetailStatus};
use carlot_ui::{BackButton, CarDetailView, ErrorDisplay, LoadingSpinner, PageContainer};
use dioxus::prelude::*;
use tracing::{info, warn};

/// Routed car detail page.
///
/// Loads the car for `car_id` into a page-local store. Each load holds a
/// ticket from `LoadTracker`; a new id or unmount cancels the running task
/// and retires its ticket, so a late response cannot overwrite newer state.
#[component]
pub fn CarDetails(car_id: ReadSignal<String>) -> Element {
    let api_config: ApiConfig = use_context();
    let contact: ContactConfig = use_context();

    let mut state = use_store(CarDetailState::default);
    let mut tracker = use_signal(LoadTracker::new);
    let mut load_task: Signal<Option<Task>> = use_signal(|| None);

    // Load on mount and whenever the route id changes
    use_effect(move || {
        let car_id = car_id();

        if let Some(task) = load_task.write().take() {
            task.cancel();
        }

        if car_id.trim().is_empty() {
            tracker.write().invalidate();
            state.write().not_found();
            return;
        }

        let ticket = tracker.write().begin(&car_id);
        state.write().begin_load();

        let api_config = api_config.clone();
        let task = spawn(async move {
            let result = api::fetch_car(&api_config, ticket.car_id()).await;

            if !tracker.peek().accepts(&ticket) {
                return;
            }
            match &result {
                Ok(car) => info!(
                    "Loaded car {} ({} {}, {} images)",
                    ticket.car_id(),
                    car.brand,
                    car.model,
                    car.images.len()
                ),
                Err(e) => warn!("Failed to load car {}: {}", ticket.car_id(), e),
            }
            state.write().finish_load(result);
            load_task.set(None);
        });
        load_task.set(Some(task));
    });

    use_drop(move || {
        if let Ok(mut guard) = load_task.try_write() {
            if let Some(task) = guard.take() {
                task.cancel();
            }
        }
        if let Ok(mut guard) = tracker.try_write() {
            guard.invalidate();
        }
    });

    let go_back = move |_: ()| navigator().go_back();

    let status = state.read().status();
    match status {
        CarDetailStatus::Loading => rsx! {
            LoadingSpinner {}
        },
        CarDetailStatus::Failed(message) => rsx! {
            PageContainer {
                BackButton { on_click: go_back }
                ErrorDisplay { message }
            }
        },
        CarDetailStatus::Loaded(car) => rsx! {
            CarDetailView { car, contact, on_back: go_back }
        },
    }
}
