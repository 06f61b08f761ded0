//! Car detail view - main component
//!
//! Owns the gallery state for one car: the slider index and the lightbox
//! state live in one `Gallery` cell over an immutable `ImageList`, and broken
//! images are tracked separately in `ImageFallbacks`. A different image list
//! (new car) resets both.

use super::contact_actions::ContactActions;
use super::image_slider::ImageSlider;
use super::info_grid::InfoGrid;
use super::lightbox::CarLightbox;
use super::thumbnail_strip::ThumbnailStrip;
use crate::components::helpers::{BackButton, PageContainer};
use carlot_common::{derive_image_list, CarRecord, ContactConfig, Gallery, ImageFallbacks, ImageSlot};
use dioxus::prelude::*;
use tracing::debug;

/// Detail page body for a loaded car
#[component]
pub fn CarDetailView(
    car: CarRecord,
    contact: ContactConfig,
    on_back: EventHandler<()>,
) -> Element {
    let images = derive_image_list(Some(&car));

    let mut gallery = use_signal(|| Gallery::new(images.len()));
    let mut fallbacks = use_signal(ImageFallbacks::new);
    let mut shown_images = use_signal(|| images.clone());

    // Reset when the parent hands over a different car
    if *shown_images.peek() != images {
        debug!("Image list changed ({} images), resetting gallery", images.len());
        shown_images.set(images.clone());
        gallery.set(Gallery::new(images.len()));
        fallbacks.write().clear();
    }

    let state = gallery();
    let failed = fallbacks();
    let title = car.title();

    let on_image_error = move |(slot, src): (ImageSlot, String)| {
        if fallbacks.write().mark_failed(slot, &src) {
            debug!("Image failed to load in {:?}, showing placeholder", slot);
        }
    };

    rsx! {
        PageContainer {
            BackButton { on_click: move |_| on_back.call(()) }

            div { class: "max-w-6xl mx-auto p-6", "data-testid": "car-detail",
                div { class: "bg-white rounded-xl shadow p-6 grid grid-cols-1 lg:grid-cols-3 gap-6",

                    div { class: "lg:col-span-2",
                        ImageSlider {
                            images: images.clone(),
                            active_index: state.active_index(),
                            fallbacks: failed.clone(),
                            alt: title.clone(),
                            on_prev: move |_| gallery.write().prev(),
                            on_next: move |_| gallery.write().next(),
                            on_open: move |_| gallery.write().open_lightbox(),
                            on_image_error,
                        }
                        ThumbnailStrip {
                            images: images.clone(),
                            active_index: state.active_index(),
                            fallbacks: failed.clone(),
                            on_select: move |i: usize| {
                                gallery.write().select(i);
                            },
                            on_image_error,
                        }
                    }

                    div {
                        h1 { class: "text-3xl font-bold", "{title}" }
                        p { class: "text-xl text-blue-600 font-semibold mt-2", {car.price_label()} }
                        InfoGrid { fields: car.info_fields() }
                        ContactActions {
                            call_href: contact.call_link(),
                            whatsapp_href: contact.whatsapp_link_for(&car),
                        }
                    }
                }
            }

            if let Some(index) = state.lightbox().index() {
                CarLightbox {
                    images: images.clone(),
                    index,
                    fallbacks: failed.clone(),
                    alt: title.clone(),
                    on_close: move |_| gallery.write().close_lightbox(),
                    on_navigate: move |i: usize| {
                        gallery.write().lightbox_select(i);
                    },
                    on_key: move |key| {
                        gallery.write().handle_key(key);
                    },
                    on_image_error,
                }
            }
        }
    }
}
