pub mod home;
pub mod listing;
pub mod predict;

pub use home::{home_page, HomeVm};
pub use listing::listing_page;
pub use predict::{predict_page, prediction_received_page};
