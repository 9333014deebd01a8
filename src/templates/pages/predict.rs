use crate::domain::prediction::{FieldError, PredictionForm, MAX_ADDRESS_LEN};
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn field_error<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

fn text_field(
    label: &str,
    name: &str,
    input_type: &str,
    value: &str,
    errors: &[FieldError],
) -> Markup {
    let error = field_error(errors, name);
    html! {
        div class=(if error.is_some() { "field invalid" } else { "field" }) {
            label for=(name) { (label) }
            input type=(input_type) id=(name) name=(name) value=(value) required;
            @if let Some(msg) = error {
                p class="helper-text" { (msg) }
            }
        }
    }
}

fn checkbox(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        label class="checkbox" {
            input type="checkbox" name=(name) checked[checked];
            " " (label)
        }
    }
}

/// The prediction form. `errors` is empty on first render.
pub fn predict_page(form: &PredictionForm, errors: &[FieldError]) -> Markup {
    desktop_layout(
        "Price Prediction Tool",
        html! {
            main class="container narrow" {
                h1 { "Predict Rent" }
                form method="post" action="/predict-price" novalidate {
                    (text_field("Number of Rooms", "rooms", "number", &form.rooms, errors))
                    (text_field("Number of Bathrooms", "bathrooms", "number", &form.bathrooms, errors))

                    div class="checkbox-row" {
                        (checkbox("Den Included", "den_included", form.den_included))
                        (checkbox("Parking Included", "parking_included", form.parking_included))
                        (checkbox("Heat Included", "heat_included", form.heat_included))
                        (checkbox("Electricity Included", "electricity_included", form.electricity_included))
                        (checkbox("Dogs Allowed", "dogs_allowed", form.dogs_allowed))
                        (checkbox("Cats Allowed", "cats_allowed", form.cats_allowed))
                    }

                    div class=(if field_error(errors, "address").is_some() { "field invalid" } else { "field" }) {
                        label for="address" { "Address" }
                        input type="text" id="address" name="address" maxlength=(MAX_ADDRESS_LEN)
                            value=(form.address) required;
                        @if let Some(msg) = field_error(errors, "address") {
                            p class="helper-text" { (msg) }
                        }
                    }
                    (text_field("Postal Code", "postal_code", "text", &form.postal_code, errors))
                    (text_field("Date in Future", "move_in_date", "date", &form.move_in_date, errors))
                    (text_field("Size in Square Feet", "size_sqft", "number", &form.size_sqft, errors))

                    button type="submit" class="primary" { "Predict Price" }
                }
            }
        },
    )
}

/// Shown after a valid submission. No price is computed here.
pub fn prediction_received_page(form: &PredictionForm) -> Markup {
    desktop_layout(
        "Price Prediction Tool",
        html! {
            main class="container narrow" {
                h1 { "Request received" }
                p {
                    "We have your details for a " (form.rooms) " room, "
                    (form.bathrooms) " bathroom unit at " (form.address) " (" (form.postal_code) ")."
                }
                p class="muted" { "Price predictions are not available yet." }
                a href="/predict-price" { "Start over" }
            }
        },
    )
}
