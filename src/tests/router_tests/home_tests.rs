use crate::tests::utils::{body_string, fixture_state, get};

#[test]
fn home_page_starts_from_the_full_slider_range() {
    let state = fixture_state();

    let resp = get(&state, "/");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Filter Properties"));
    assert!(body.contains("Showing <strong>5</strong> of 6 listings."));
    for id in 1..=5 {
        assert!(body.contains(&format!("id=\"listing-{id}\"")), "listing {id}");
    }
    // 5400 CAD is above the slider's maximum.
    assert!(!body.contains("id=\"listing-6\""));
    assert!(body.contains("data-zoom=\"12\""));
    assert!(!body.contains("selection-panel"));
}

#[test]
fn untouched_filter_form_matches_first_load() {
    let state = fixture_state();

    let first_load = body_string(get(&state, "/"));
    let submitted = body_string(get(
        &state,
        "/?price_min=0&price_max=5000&rooms=&bathrooms=&area=",
    ));

    assert_eq!(first_load, submitted);
}

#[test]
fn raising_the_price_bound_reveals_expensive_listings() {
    let state = fixture_state();

    let body = body_string(get(&state, "/?price_max=6000"));

    assert!(body.contains("Showing <strong>6</strong> of 6 listings."));
    assert!(body.contains("id=\"listing-6\""));
}

#[test]
fn query_filters_narrow_the_markers() {
    let state = fixture_state();

    let body = body_string(get(&state, "/?rooms=2&area=Clayton+Park"));

    assert!(body.contains("Showing <strong>2</strong> of 6 listings."));
    assert!(body.contains("id=\"listing-1\""));
    assert!(body.contains("id=\"listing-2\""));
    assert!(!body.contains("id=\"listing-3\""));
    // The area select keeps the chosen neighborhood.
    assert!(body.contains("<option value=\"Clayton Park\" selected>"));
}

#[test]
fn malformed_filter_values_are_ignored() {
    let state = fixture_state();

    let body = body_string(get(&state, "/?rooms=abc&bathrooms=&price_max=lots"));

    // The unparseable bound falls back to the slider's maximum.
    assert!(body.contains("Showing <strong>5</strong> of 6 listings."));
}

#[test]
fn selecting_a_listing_shows_highlights_and_parking() {
    let state = fixture_state();

    let body = body_string(get(&state, "/?selected=1"));

    assert!(body.contains("selection-panel"));
    assert!(body.contains("Selected property 1"));
    assert!(body.contains("marker marker-selected"));
    assert!(body.contains("marker marker-highlighted"));
    // 2 and 4 share builder and area; 3 is a different builder.
    assert!(body.contains("Property ID: 2"));
    assert!(body.contains("Builder: Southwest Properties"));
    assert!(!body.contains("Builder: Killam Apartment REIT"));
    assert!(body.contains("class=\"parking\""));
    assert!(body.contains("Clayton Park Lot"));
    assert!(body.contains("data-zoom=\"15\""));
}

#[test]
fn selection_respects_active_filters() {
    let state = fixture_state();

    // Listing 4 costs 2600 and drops out of the filtered set.
    let body = body_string(get(&state, "/?price_max=2000&selected=1"));

    assert!(body.contains("href=\"#listing-2\""));
    assert!(!body.contains("href=\"#listing-4\""));
    assert!(!body.contains("id=\"listing-4\""));
}

#[test]
fn highlight_links_focus_the_marker_without_reselecting() {
    let state = fixture_state();

    let body = body_string(get(&state, "/?selected=1"));

    assert!(body.contains("href=\"#listing-2\""));
    assert!(body.contains("href=\"#listing-4\""));
}

#[test]
fn selected_listing_hidden_by_filters_keeps_its_marker() {
    let state = fixture_state();

    // Only listing 5 has a single room; listing 1 is selected anyway.
    let body = body_string(get(&state, "/?rooms=1&selected=1"));

    assert!(body.contains("Showing <strong>1</strong> of 6 listings."));
    assert!(body.contains("Selected property 1"));
    assert!(body.contains("class=\"marker marker-selected\" id=\"listing-1\""));
    assert!(body.contains("id=\"listing-5\""));
    assert!(!body.contains("id=\"listing-2\""));
    assert!(body.contains("data-zoom=\"15\""));
    // Listing 5 is in another area, so nothing is highlighted.
    assert!(!body.contains("marker marker-highlighted"));
    assert!(body.contains("No nearby properties from this builder in Clayton Park."));
}

#[test]
fn unknown_selection_renders_without_panel() {
    let state = fixture_state();

    let resp = get(&state, "/?selected=999");

    assert_eq!(resp.status(), 200);
    assert!(!body_string(resp).contains("selection-panel"));
}

#[test]
fn listing_detail_page() {
    let state = fixture_state();

    let resp = get(&state, "/listing/5");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Property ID: 5"));
    assert!(body.contains("Southend Halifax"));
    assert!(body.contains("Spring Garden Parkade"));
}

#[test]
fn unknown_routes_and_listings_are_404() {
    let state = fixture_state();

    assert_eq!(get(&state, "/listing/999").status(), 404);
    assert_eq!(get(&state, "/listing/abc").status(), 404);
    assert_eq!(get(&state, "/admin").status(), 404);
}
