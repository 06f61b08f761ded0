//! Inline slider showing the active image

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use carlot_common::{ImageFallbacks, ImageList, ImageSlot};
use dioxus::prelude::*;

/// Main image with prev/next arrows; clicking the image opens the lightbox.
///
/// Arrows are only rendered when there is more than one image.
#[component]
pub fn ImageSlider(
    images: ImageList,
    active_index: usize,
    fallbacks: ImageFallbacks,
    alt: String,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_open: EventHandler<()>,
    on_image_error: EventHandler<(ImageSlot, String)>,
) -> Element {
    let src = images.get(active_index).to_string();
    let shown = fallbacks.resolve(ImageSlot::Main, &src).to_string();

    rsx! {
        div { class: "relative rounded-lg overflow-hidden", "data-testid": "image-slider",
            img {
                src: "{shown}",
                alt: "{alt}",
                class: "w-full h-[420px] object-cover cursor-pointer",
                onclick: move |_| on_open.call(()),
                onerror: move |_| on_image_error.call((ImageSlot::Main, src.clone())),
            }

            if images.has_multiple() {
                button {
                    class: "absolute left-3 top-1/2 -translate-y-1/2 bg-black/60 hover:bg-black/80 text-white w-10 h-10 rounded-full flex items-center justify-center transition-colors",
                    aria_label: "Previous image",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_prev.call(());
                    },
                    ChevronLeftIcon { class: "w-6 h-6" }
                }
                button {
                    class: "absolute right-3 top-1/2 -translate-y-1/2 bg-black/60 hover:bg-black/80 text-white w-10 h-10 rounded-full flex items-center justify-center transition-colors",
                    aria_label: "Next image",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_next.call(());
                    },
                    ChevronRightIcon { class: "w-6 h-6" }
                }
            }
        }
    }
}
