//! carlot-ui - View components and stores for the car detail page
//!
//! Pure views driven by props and event handlers, plus the page store.
//! Loading and routing live in `carlot-web`.

pub mod components;
pub mod hooks;
pub mod stores;

pub use components::*;
