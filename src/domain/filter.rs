// src/domain/filter.rs

use crate::domain::listing::Listing;
use serde::Serialize;
use std::collections::HashMap;

/// Bounds of the rent slider shown on the home page, in CAD.
pub const PRICE_SLIDER_MIN: f64 = 0.0;
pub const PRICE_SLIDER_MAX: f64 = 5000.0;
pub const PRICE_SLIDER_STEP: f64 = 100.0;

/// Inclusive price bounds. A missing bound does not constrain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Declarative filter state. Replaced wholesale on every change; every field
/// that is present narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub price: PriceRange,
    pub rooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub area: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from raw query/form values. Blank or non-numeric
    /// values leave the corresponding criterion unset. Rooms are whole
    /// numbers, so a fractional value is truncated.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let number = |key: &str| params.get(key).and_then(|v| coerce_number(v));

        FilterCriteria {
            price: PriceRange {
                min: number("price_min"),
                max: number("price_max"),
            },
            rooms: number("rooms").map(f64::trunc),
            bathrooms: number("bathrooms"),
            area: params
                .get("area")
                .map(|a| a.trim())
                .filter(|a| !a.is_empty())
                .map(str::to_string),
        }
    }

    /// Fills unset price bounds with the slider's ends, the range the filter
    /// form starts from.
    pub fn with_slider_defaults(mut self) -> Self {
        self.price.min.get_or_insert(PRICE_SLIDER_MIN);
        self.price.max.get_or_insert(PRICE_SLIDER_MAX);
        self
    }

    /// Inverse of `from_params`, used to carry the active filters across links.
    pub fn to_query(&self) -> String {
        let mut q = url::form_urlencoded::Serializer::new(String::new());
        if let Some(min) = self.price.min {
            q.append_pair("price_min", &min.to_string());
        }
        if let Some(max) = self.price.max {
            q.append_pair("price_max", &max.to_string());
        }
        if let Some(rooms) = self.rooms {
            q.append_pair("rooms", &rooms.to_string());
        }
        if let Some(bathrooms) = self.bathrooms {
            q.append_pair("bathrooms", &bathrooms.to_string());
        }
        if let Some(area) = &self.area {
            q.append_pair("area", area);
        }
        q.finish()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.rooms.map_or(true, |r| f64::from(listing.rooms) == r)
            && self.bathrooms.map_or(true, |b| listing.bathrooms == b)
            && self.area.as_deref().map_or(true, |a| listing.area == a)
            && self.price.contains(listing.price)
    }
}

/// Numeric coercion for filter inputs. Anything that is not a finite number
/// is treated as "not set".
fn coerce_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Produces the active subset of a dataset for a set of criteria.
///
/// Implementations must be pure and keep the relative order of the
/// surviving listings.
pub trait ListingFilter {
    fn apply(&self, dataset: &[Listing], criteria: &FilterCriteria) -> Vec<Listing>;
}

/// Single linear pass over the dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearFilter;

impl ListingFilter for LinearFilter {
    fn apply(&self, dataset: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
        dataset
            .iter()
            .filter(|listing| criteria.matches(listing))
            .cloned()
            .collect()
    }
}
