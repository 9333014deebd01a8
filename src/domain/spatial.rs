// src/domain/spatial.rs

use crate::domain::listing::{GeoPoint, Listing, Located, ParkingFacility};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nearest-neighbour query over an empty set")]
pub struct EmptyInputError;

/// Euclidean distance in raw degree space.
///
/// This is a planar approximation and deliberately not a great-circle
/// distance: tie-breaks between neighbours depend on it.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = a.lat - b.lat;
    let dlon = a.lon - b.lon;
    (dlat * dlat + dlon * dlon).sqrt()
}

/// The facility closest to `point`. On an exact tie the one that comes
/// first in `facilities` wins.
pub fn nearest_facility<'a>(
    point: &impl Located,
    facilities: &'a [ParkingFacility],
) -> Result<&'a ParkingFacility, EmptyInputError> {
    let origin = point.position();
    let mut iter = facilities.iter();
    let first = iter.next().ok_or(EmptyInputError)?;

    let (best, _) = iter.fold((first, distance(origin, first.position())), |best, f| {
        let d = distance(origin, f.position());
        if d < best.1 {
            (f, d)
        } else {
            best
        }
    });

    Ok(best)
}

/// Up to `k` candidates ordered nearest-first. The sort is stable, so
/// candidates at equal distance keep their input order.
pub fn k_nearest_same_area(point: &impl Located, candidates: &[Listing], k: i64) -> Vec<Listing> {
    if k <= 0 {
        return Vec::new();
    }
    let origin = point.position();

    let mut ranked: Vec<(f64, &Listing)> = candidates
        .iter()
        .map(|l| (distance(origin, l.position()), l))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked
        .into_iter()
        .take(usize::try_from(k).unwrap_or(usize::MAX))
        .map(|(_, l)| l.clone())
        .collect()
}

/// Read-only holder of the loaded datasets.
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    listings: Vec<Listing>,
    parking: Vec<ParkingFacility>,
}

impl SpatialIndex {
    pub fn new(listings: Vec<Listing>, parking: Vec<ParkingFacility>) -> Self {
        Self { listings, parking }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn parking(&self) -> &[ParkingFacility] {
        &self.parking
    }

    pub fn listing(&self, id: i64) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn nearest_parking(&self, point: &impl Located) -> Result<&ParkingFacility, EmptyInputError> {
        nearest_facility(point, &self.parking)
    }
}
