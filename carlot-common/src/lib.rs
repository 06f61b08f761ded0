//! carlot-common - UI-free logic for the car detail page
//!
//! Data model, API envelope decoding, image-list derivation, the
//! slider/lightbox state machine and the stale-load guard. Shared by
//! `carlot-ui` and `carlot-web`; nothing here touches the DOM.

mod car;
mod config;
mod contact;
mod envelope;
mod gallery;
mod images;
mod load;

pub use car::{format_indian_number, CarRecord, InfoField, MISSING_VALUE};
pub use config::ApiConfig;
pub use contact::{enquiry_text, tel_link, whatsapp_link, ContactConfig};
pub use envelope::{decode_car_response, ApiResponse, LoadError, GENERIC_LOAD_ERROR};
pub use gallery::{next_index, prev_index, Gallery, LightboxKey, LightboxState};
pub use images::{
    derive_image_list, ImageFallbacks, ImageList, ImageSlot, PLACEHOLDER_CAR_IMAGE,
    PLACEHOLDER_ERROR_IMAGE,
};
pub use load::{LoadTicket, LoadTracker};
