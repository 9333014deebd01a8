// src/domain/selection.rs

use crate::domain::listing::{GeoPoint, Listing, Located, ParkingFacility};
use crate::domain::spatial::{k_nearest_same_area, nearest_facility};
use serde::Serialize;

/// Overview map position used when nothing is selected.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 44.651070,
    lon: -63.582687,
};
pub const DEFAULT_ZOOM: u8 = 12;
/// Zoom applied when a listing is selected. Always above `DEFAULT_ZOOM`.
pub const FOCUS_ZOOM: u8 = 15;

pub const DEFAULT_REFERENCE_BUILDER: &str = "Southwest Properties";
pub const DEFAULT_HIGHLIGHT_K: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Everything the view needs after a listing is clicked. Recomputed from
/// scratch on every click.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    pub clicked: Listing,
    /// Nearest-first, at most `k` entries, never contains `clicked`.
    pub highlighted: Vec<Listing>,
    pub nearest_parking: Option<ParkingFacility>,
    pub recommended_center: GeoPoint,
    pub recommended_zoom: u8,
}

impl SelectionResult {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            center: self.recommended_center,
            zoom: self.recommended_zoom,
        }
    }

    pub fn is_highlighted(&self, id: i64) -> bool {
        self.highlighted.iter().any(|l| l.id == id)
    }
}

/// Pairs a clicked listing with sibling listings from the reference builder
/// and the closest parking facility.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    reference_builder: String,
    k: i64,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_BUILDER, DEFAULT_HIGHLIGHT_K)
    }
}

impl SelectionEngine {
    pub fn new(reference_builder: impl Into<String>, k: i64) -> Self {
        Self {
            reference_builder: reference_builder.into(),
            k,
        }
    }

    pub fn reference_builder(&self) -> &str {
        &self.reference_builder
    }

    pub fn select(
        &self,
        clicked: &Listing,
        filtered: &[Listing],
        all_parking: &[ParkingFacility],
    ) -> SelectionResult {
        select(clicked, filtered, all_parking, &self.reference_builder, self.k)
    }
}

/// Pure selection step. `filtered` is the currently active subset, while
/// parking is always searched in full.
pub fn select(
    clicked: &Listing,
    filtered: &[Listing],
    all_parking: &[ParkingFacility],
    reference_builder: &str,
    k: i64,
) -> SelectionResult {
    let candidates: Vec<Listing> = filtered
        .iter()
        .filter(|l| l.is_built_by(reference_builder))
        .filter(|l| l.area == clicked.area)
        .filter(|l| l.id != clicked.id)
        .cloned()
        .collect();

    let highlighted = k_nearest_same_area(clicked, &candidates, k);
    // No parking on file is a normal outcome, not a failure.
    let nearest_parking = nearest_facility(clicked, all_parking).ok().cloned();

    SelectionResult {
        clicked: clicked.clone(),
        highlighted,
        nearest_parking,
        recommended_center: clicked.position(),
        recommended_zoom: FOCUS_ZOOM,
    }
}
