//! Hooks shared by the views

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use tracing::{debug, warn};
use wasm_bindgen_x::JsCast;

/// Window `keydown` listener whose lifetime matches the calling component.
///
/// The listener is attached after the first render and removed when the
/// component unmounts, so it never outlives the view that owns it.
/// `on_key` receives the DOM `KeyboardEvent.key` value.
pub fn use_window_keydown(on_key: EventHandler<String>) {
    let mut subscription: Signal<Option<KeydownSubscription>> = use_signal(|| None);

    // WORKAROUND: attach from use_effect rather than use_hook so the
    // web_sys_x::window() call happens after the render cycle.
    use_effect(move || {
        if subscription.peek().is_some() {
            return;
        }
        let Some(window) = web_sys_x::window() else {
            return;
        };

        // The callback runs from wasm-bindgen, outside the Dioxus runtime.
        let runtime = Runtime::current();
        let callback = wasm_bindgen_x::closure::Closure::wrap(Box::new(
            move |event: web_sys_x::KeyboardEvent| {
                let _guard = RuntimeGuard::new(runtime.clone());
                on_key.call(event.key());
            },
        )
            as Box<dyn FnMut(web_sys_x::KeyboardEvent)>);

        if let Err(e) =
            window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to attach keydown listener: {:?}", e);
            return;
        }
        debug!("Keydown listener attached");
        subscription.set(Some(KeydownSubscription { window, callback }));
    });

    use_drop(move || {
        if let Ok(mut guard) = subscription.try_write() {
            // Dropping the subscription detaches the listener.
            guard.take();
        }
    });
}

/// An attached window listener; detaches itself on drop.
struct KeydownSubscription {
    window: web_sys_x::Window,
    callback: wasm_bindgen_x::closure::Closure<dyn FnMut(web_sys_x::KeyboardEvent)>,
}

impl Drop for KeydownSubscription {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "keydown",
            self.callback.as_ref().unchecked_ref(),
        );
        debug!("Keydown listener detached");
    }
}
