pub mod connection;
pub mod listings;
pub mod parking;
pub mod seed;

pub use connection::{init_db, Database};
pub use seed::{load_index, seed_if_present};
