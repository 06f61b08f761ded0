//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod car_detail;

pub use car_detail::*;
