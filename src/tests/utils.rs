use crate::domain::listing::{Listing, ParkingFacility};
use crate::domain::selection::SelectionEngine;
use crate::domain::spatial::SpatialIndex;
use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub const SW: &str = "Southwest Properties";

pub fn listing(
    id: i64,
    lat: f64,
    lon: f64,
    price: f64,
    rooms: u32,
    area: &str,
    builder: &str,
) -> Listing {
    Listing {
        id,
        latitude: lat,
        longitude: lon,
        price,
        rooms,
        bathrooms: 1.0,
        area: area.to_string(),
        builder: builder.to_string(),
    }
}

/// Small Halifax dataset: three Southwest listings in Clayton Park, one
/// Killam listing there too, and a couple elsewhere.
pub fn fixture_state() -> AppState {
    let listings = vec![
        listing(1, 44.65, -63.58, 1800.0, 2, "Clayton Park", SW),
        listing(2, 44.651, -63.581, 1950.0, 2, "Clayton Park", SW),
        listing(3, 44.6502, -63.5801, 2100.0, 3, "Clayton Park", "Killam Apartment REIT"),
        listing(4, 44.655, -63.585, 2600.0, 3, "Clayton Park", SW),
        listing(5, 44.64, -63.57, 1500.0, 1, "Southend Halifax", SW),
        listing(6, 44.68, -63.65, 5400.0, 4, "Larry Uteck", "Dexel Developments"),
    ];
    let parking = vec![
        ParkingFacility {
            id: 10,
            name: "Spring Garden Parkade".to_string(),
            latitude: 44.64,
            longitude: -63.58,
        },
        ParkingFacility {
            id: 11,
            name: "Clayton Park Lot".to_string(),
            latitude: 44.655,
            longitude: -63.58,
        },
    ];

    AppState::new(
        SpatialIndex::new(listings, parking),
        SelectionEngine::new(SW, 3),
    )
}

pub fn get(state: &AppState, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    respond(state, req)
}

pub fn post_form(state: &AppState, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();
    respond(state, req)
}

/// Routes a request the way the server does, including error pages.
fn respond(state: &AppState, req: Request<Body>) -> Response {
    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => crate::templates::html_error_response(err),
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).expect("response was not JSON")
}
