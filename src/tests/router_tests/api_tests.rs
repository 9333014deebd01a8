use crate::domain::listing::ParkingFacility;
use crate::domain::selection::SelectionEngine;
use crate::domain::spatial::SpatialIndex;
use crate::router::AppState;
use crate::tests::utils::{body_json, fixture_state, get, listing, SW};

#[test]
fn listings_endpoint_returns_the_filtered_set_in_order() {
    let state = fixture_state();

    let resp = get(&state, "/api/listings?area=Clayton%20Park&price_min=1900");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    let json = body_json(resp);
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn selection_endpoint_pairs_siblings_and_parking() {
    let state = fixture_state();

    let json = body_json(get(&state, "/api/selection?id=1"));

    let highlighted: Vec<i64> = json["highlighted"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(highlighted, vec![2, 4]);
    assert_eq!(json["clicked"]["id"], 1);
    assert_eq!(json["nearest_parking"]["id"], 11);
    assert_eq!(json["recommended_zoom"], 15);
    assert_eq!(json["recommended_center"]["lat"], 44.65);
    assert_eq!(json["recommended_center"]["lon"], -63.58);
}

#[test]
fn selection_endpoint_uses_filtered_candidates() {
    let state = fixture_state();

    let json = body_json(get(&state, "/api/selection?id=1&rooms=2"));

    let highlighted = json["highlighted"].as_array().unwrap();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0]["id"], 2);
}

#[test]
fn selection_endpoint_accepts_a_listing_hidden_by_filters() {
    let state = fixture_state();

    // rooms=3 keeps listings 3 and 4; listing 1 has two rooms.
    let resp = get(&state, "/api/selection?id=1&rooms=3");

    assert_eq!(resp.status(), 200);
    let json = body_json(resp);
    assert_eq!(json["clicked"]["id"], 1);
    let highlighted: Vec<i64> = json["highlighted"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(highlighted, vec![4]);
    assert_eq!(json["recommended_zoom"], 15);
}

#[test]
fn selection_endpoint_errors() {
    let state = fixture_state();

    let missing = get(&state, "/api/selection");
    assert_eq!(missing.status(), 400);
    assert!(body_json(missing)["error"]
        .as_str()
        .unwrap()
        .contains("missing listing id"));

    assert_eq!(get(&state, "/api/selection?id=nope").status(), 400);
    assert_eq!(get(&state, "/api/selection?id=404").status(), 404);
}

#[test]
fn empty_parking_dataset_gives_null_parking() {
    let state = AppState::new(
        SpatialIndex::new(
            vec![
                listing(1, 44.65, -63.58, 1800.0, 2, "Clayton Park", SW),
                listing(2, 44.651, -63.581, 1900.0, 2, "Clayton Park", SW),
            ],
            Vec::<ParkingFacility>::new(),
        ),
        SelectionEngine::new(SW, 3),
    );

    let resp = get(&state, "/api/selection?id=2");

    assert_eq!(resp.status(), 200);
    let json = body_json(resp);
    assert!(json["nearest_parking"].is_null());
    assert_eq!(json["highlighted"][0]["id"], 1);
}
