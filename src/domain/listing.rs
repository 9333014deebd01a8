// src/domain/listing.rs

use serde::{Deserialize, Serialize};

/// Neighborhoods offered by the area filter.
pub const AREAS: [&str; 5] = [
    "Southend Halifax",
    "Central Halifax",
    "Clayton Park",
    "Rockingham",
    "Larry Uteck",
];

/// A latitude/longitude pair in raw degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Anything that sits at a single point on the map.
pub trait Located {
    fn position(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn position(&self) -> GeoPoint {
        *self
    }
}

/// A rental listing as loaded from the dataset. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    /// Monthly rent in CAD.
    pub price: f64,
    pub rooms: u32,
    /// Multiples of 0.5.
    pub bathrooms: f64,
    pub area: String,
    pub builder: String,
}

impl Listing {
    /// Case-insensitive exact match on the builder name.
    pub fn is_built_by(&self, builder: &str) -> bool {
        self.builder.to_lowercase() == builder.to_lowercase()
    }
}

impl Located for Listing {
    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingFacility {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Located for ParkingFacility {
    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
