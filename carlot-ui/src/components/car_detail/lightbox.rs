//! Full-screen image viewer

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::hooks::use_window_keydown;
use carlot_common::{next_index, prev_index, ImageFallbacks, ImageList, ImageSlot, LightboxKey};
use dioxus::prelude::*;

/// Lightbox over the whole page.
///
/// Mount it only while open: the window keyboard listener lives exactly as
/// long as this component. Escape closes, the arrow keys step with
/// wraparound. Clicking the backdrop closes; clicks on the image do not.
#[component]
pub fn CarLightbox(
    images: ImageList,
    /// Lightbox index, independent of the slider
    index: usize,
    fallbacks: ImageFallbacks,
    alt: String,
    on_close: EventHandler<()>,
    on_navigate: EventHandler<usize>,
    on_key: EventHandler<LightboxKey>,
    on_image_error: EventHandler<(ImageSlot, String)>,
) -> Element {
    let keydown = use_callback(move |key: String| on_key.call(LightboxKey::from_key_name(&key)));
    use_window_keydown(keydown);

    let total = images.len();
    let idx = index.min(total - 1);
    let src = images.get(idx).to_string();
    let shown = fallbacks.resolve(ImageSlot::Lightbox, &src).to_string();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/90 z-50 flex items-center justify-center",
            "data-testid": "lightbox",
            onclick: move |_| on_close.call(()),

            button {
                class: "absolute top-5 right-5 text-gray-300 hover:text-white transition-colors",
                aria_label: "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(());
                },
                XIcon { class: "w-8 h-8" }
            }

            if images.has_multiple() {
                div { class: "absolute top-5 left-5 text-gray-400 text-sm",
                    {format!("{} / {}", idx + 1, total)}
                }

                button {
                    class: "absolute left-5 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors",
                    aria_label: "Previous image",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_navigate.call(prev_index(idx, total));
                    },
                    ChevronLeftIcon {
                        class: "w-8 h-8 text-gray-300 -translate-x-0.5",
                        stroke_width: "1.5",
                    }
                }

                button {
                    class: "absolute right-5 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors",
                    aria_label: "Next image",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_navigate.call(next_index(idx, total));
                    },
                    ChevronRightIcon {
                        class: "w-8 h-8 text-gray-300 translate-x-0.5",
                        stroke_width: "1.5",
                    }
                }
            }

            img {
                src: "{shown}",
                alt: "{alt}",
                class: "max-w-[90%] max-h-[90%] object-contain",
                onclick: move |e| e.stop_propagation(),
                onerror: move |_| on_image_error.call((ImageSlot::Lightbox, src.clone())),
            }
        }
    }
}
