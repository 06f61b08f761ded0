mod car_details;
mod home;

pub use car_details::CarDetails;
pub use home::{Home, PageNotFound};
