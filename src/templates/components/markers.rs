use crate::domain::filter::FilterCriteria;
use crate::domain::listing::Listing;
use crate::domain::selection::{SelectionResult, Viewport};
use maud::{html, Markup};

/// Link that re-renders the home page with `id` selected and the current
/// filters kept.
pub fn select_href(criteria: &FilterCriteria, id: i64) -> String {
    let query = criteria.to_query();
    if query.is_empty() {
        format!("/?selected={id}")
    } else {
        format!("/?{query}&selected={id}")
    }
}

fn marker_state(listing: &Listing, selection: Option<&SelectionResult>) -> &'static str {
    match selection {
        Some(sel) if sel.clicked.id == listing.id => "selected",
        Some(sel) if sel.is_highlighted(listing.id) => "highlighted",
        _ => "default",
    }
}

/// Map container plus one marker per listing. Positions and viewport are
/// carried as data attributes for whatever map renderer the page is paired with.
///
/// The clicked listing always gets a marker, even when the filters hide it.
pub fn listing_map(
    listings: &[Listing],
    criteria: &FilterCriteria,
    selection: Option<&SelectionResult>,
    viewport: Viewport,
) -> Markup {
    let hidden_clicked = selection
        .map(|s| &s.clicked)
        .filter(|clicked| !listings.iter().any(|l| l.id == clicked.id));

    html! {
        div id="map" class="map"
            data-center-lat=(viewport.center.lat)
            data-center-lon=(viewport.center.lon)
            data-zoom=(viewport.zoom)
        {
            ul class="markers" {
                @for listing in listings {
                    (listing_marker(listing, criteria, marker_state(listing, selection)))
                }
                @if let Some(clicked) = hidden_clicked {
                    (listing_marker(clicked, criteria, "selected"))
                }
                @if let Some(parking) = selection.and_then(|s| s.nearest_parking.as_ref()) {
                    li class="marker marker-parking"
                        id=(format!("parking-{}", parking.id))
                        data-id=(parking.id)
                        data-lat=(parking.latitude)
                        data-lon=(parking.longitude)
                    {
                        strong { (parking.name) }
                    }
                }
            }
        }
    }
}

fn listing_marker(listing: &Listing, criteria: &FilterCriteria, state: &str) -> Markup {
    html! {
        li class=(format!("marker marker-{state}"))
            id=(format!("listing-{}", listing.id))
            data-id=(listing.id)
            data-lat=(listing.latitude)
            data-lon=(listing.longitude)
        {
            a href=(select_href(criteria, listing.id)) {
                (listing_popup(listing))
            }
        }
    }
}

pub fn listing_popup(listing: &Listing) -> Markup {
    html! {
        div class="popup" {
            h2 { "Property ID: " (listing.id) }
            p { "Price: " (listing.price) " CAD" }
            p { "Rooms: " (listing.rooms) }
            p { "Bathrooms: " (listing.bathrooms) }
            p { "Area: " (listing.area) }
        }
    }
}
