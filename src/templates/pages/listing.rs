use crate::domain::listing::{Listing, ParkingFacility};
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn listing_page(listing: &Listing, nearest_parking: Option<&ParkingFacility>) -> Markup {
    desktop_layout(
        &format!("Property {}", listing.id),
        html! {
            main class="container narrow" {
                (card(&format!("Property ID: {}", listing.id), html! {
                    dl {
                        dt { "Price" } dd { (listing.price) " CAD / month" }
                        dt { "Rooms" } dd { (listing.rooms) }
                        dt { "Bathrooms" } dd { (listing.bathrooms) }
                        dt { "Area" } dd { (listing.area) }
                        dt { "Builder" } dd { (listing.builder) }
                        dt { "Location" } dd { (listing.latitude) ", " (listing.longitude) }
                    }
                }))

                @if let Some(parking) = nearest_parking {
                    (card("Nearest parking", html! {
                        p { (parking.name) }
                    }))
                }

                a href=(format!("/?selected={}", listing.id)) { "Show on map" }
            }
        },
    )
}
