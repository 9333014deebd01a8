pub mod card;
pub mod error;
pub mod filter_form;
pub mod markers;
pub mod selection_panel;

pub use card::card;
pub use error::html_error_response;
pub use filter_form::filter_form;
pub use markers::{listing_map, listing_popup, select_href};
pub use selection_panel::selection_panel;
