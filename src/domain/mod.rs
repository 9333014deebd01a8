pub mod filter;
pub mod listing;
pub mod prediction;
pub mod selection;
pub mod spatial;

pub use filter::{FilterCriteria, LinearFilter, ListingFilter, PriceRange};
pub use listing::{GeoPoint, Listing, Located, ParkingFacility, AREAS};
pub use selection::{SelectionEngine, SelectionResult, Viewport};
pub use spatial::{EmptyInputError, SpatialIndex};
