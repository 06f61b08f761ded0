use carlot_common::{ImageFallbacks, ImageList, ImageSlot};
use dioxus::prelude::*;

/// Row of thumbnails under the slider; the active one is outlined.
/// Renders nothing for a single image.
#[component]
pub fn ThumbnailStrip(
    images: ImageList,
    active_index: usize,
    fallbacks: ImageFallbacks,
    on_select: EventHandler<usize>,
    on_image_error: EventHandler<(ImageSlot, String)>,
) -> Element {
    if !images.has_multiple() {
        return rsx! {};
    }

    rsx! {
        div { class: "flex gap-3 mt-4 overflow-x-auto p-1", "data-testid": "thumbnail-strip",
            for (i , url) in images.iter().enumerate() {
                {
                    let slot = ImageSlot::Thumbnail(i);
                    let src = url.to_string();
                    let shown = fallbacks.resolve(slot, url).to_string();
                    let label = format!("Thumbnail {}", i + 1);
                    let border = if i == active_index {
                        "border-2 border-blue-500"
                    } else {
                        "border border-gray-300 hover:border-gray-400"
                    };
                    rsx! {
                        img {
                            key: "{i}",
                            src: "{shown}",
                            alt: "{label}",
                            class: "flex-shrink-0 w-20 h-20 object-cover rounded cursor-pointer {border}",
                            onclick: move |_| on_select.call(i),
                            onerror: move |_| on_image_error.call((slot, src.clone())),
                        }
                    }
                }
            }
        }
    }
}
