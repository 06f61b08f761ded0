//! Shared UI components

pub mod car_detail;
pub mod helpers;
pub mod icons;

pub use car_detail::{
    CarDetailView, CarLightbox, ContactActions, ImageSlider, InfoGrid, InfoTile, ThumbnailStrip,
};
pub use helpers::{BackButton, ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{
    ArrowLeftIcon, ChevronLeftIcon, ChevronRightIcon, FuelIcon, GaugeIcon, MapPinIcon,
    MessageCircleIcon, PhoneIcon, SettingsIcon, UsersIcon, XIcon,
};
