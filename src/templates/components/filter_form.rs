use crate::domain::filter::{FilterCriteria, PRICE_SLIDER_MAX, PRICE_SLIDER_MIN, PRICE_SLIDER_STEP};
use crate::domain::listing::AREAS;
use maud::{html, Markup};

/// The rent/rooms/bathrooms/area controls. Submits back to `/` as a GET so
/// the active filters live in the query string.
pub fn filter_form(criteria: &FilterCriteria) -> Markup {
    let price_min = criteria.price.min.unwrap_or(PRICE_SLIDER_MIN);
    let price_max = criteria.price.max.unwrap_or(PRICE_SLIDER_MAX);

    html! {
        form class="filters" method="get" action="/" {
            fieldset {
                legend { "Rent" }
                label for="price_min" { "Min (CAD)" }
                input type="range" id="price_min" name="price_min"
                    min=(PRICE_SLIDER_MIN) max=(PRICE_SLIDER_MAX) step=(PRICE_SLIDER_STEP)
                    value=(price_min);
                label for="price_max" { "Max (CAD)" }
                input type="range" id="price_max" name="price_max"
                    min=(PRICE_SLIDER_MIN) max=(PRICE_SLIDER_MAX) step=(PRICE_SLIDER_STEP)
                    value=(price_max);
                p class="range-labels" { span { "0 CAD" } span { "5000 CAD" } }
            }

            label for="rooms" { "Number of Rooms" }
            input type="number" id="rooms" name="rooms" min="0"
                value=[criteria.rooms];

            label for="bathrooms" { "Number of Bathrooms" }
            input type="number" id="bathrooms" name="bathrooms" min="0" step="0.5"
                value=[criteria.bathrooms];

            label for="area" { "Area" }
            select id="area" name="area" {
                option value="" selected[criteria.area.is_none()] { "Any area" }
                @for area in AREAS {
                    option value=(area) selected[criteria.area.as_deref() == Some(area)] { (area) }
                }
            }

            button type="submit" class="primary" { "Apply filters" }
            a href="/" class="reset" { "Reset" }
        }
    }
}
