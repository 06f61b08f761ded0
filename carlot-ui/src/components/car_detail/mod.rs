pub mod contact_actions;
pub mod image_slider;
pub mod info_grid;
pub mod lightbox;
pub mod thumbnail_strip;
pub mod view;

pub use contact_actions::ContactActions;
pub use image_slider::ImageSlider;
pub use info_grid::{InfoGrid, InfoTile};
pub use lightbox::CarLightbox;
pub use thumbnail_strip::ThumbnailStrip;
pub use view::CarDetailView;
