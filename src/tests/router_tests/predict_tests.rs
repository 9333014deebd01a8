use crate::tests::utils::{body_string, fixture_state, get, post_form};

#[test]
fn prediction_form_renders() {
    let state = fixture_state();

    let resp = get(&state, "/predict-price");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Predict Rent"));
    assert!(body.contains("name=\"postal_code\""));
    assert!(body.contains("Den Included"));
    assert!(!body.contains("helper-text"));
}

#[test]
fn invalid_submission_shows_field_errors() {
    let state = fixture_state();

    let resp = post_form(
        &state,
        "/predict-price",
        "rooms=0&bathrooms=1.25&address=1+Main+St&postal_code=12345&move_in_date=2000-01-01&size_sqft=700&dogs_allowed=on",
    );

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Number of rooms must be a positive integer"));
    assert!(body.contains("Number of bathrooms must be in increments of 0.5"));
    assert!(body.contains("Invalid Canadian postal code"));
    assert!(body.contains("Date must be in the future"));
    assert!(!body.contains("Size must be a positive number"));
    // Submitted values survive the round trip.
    assert!(body.contains("value=\"1 Main St\""));
}

#[test]
fn valid_submission_is_acknowledged() {
    let state = fixture_state();

    let resp = post_form(
        &state,
        "/predict-price",
        "rooms=2&bathrooms=1.5&address=5657+Spring+Garden+Rd&postal_code=B3J+3R4&move_in_date=2999-01-01&size_sqft=850",
    );

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Request received"));
    assert!(body.contains("5657 Spring Garden Rd"));
}
