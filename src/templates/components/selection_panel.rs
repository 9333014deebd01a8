use crate::domain::selection::SelectionResult;
use maud::{html, Markup};

/// Companion panel for a selection: the highlighted siblings, the nearest
/// parking and the recommended viewport. Highlight links jump to the
/// sibling's marker and leave the selection as it is.
pub fn selection_panel(selection: &SelectionResult, reference_builder: &str) -> Markup {
    html! {
        aside class="selection-panel" id="selection" {
            h3 { "Selected property " (selection.clicked.id) }
            p class="muted" {
                "Zoom " (selection.recommended_zoom) " at "
                (format!("{:.5}, {:.5}", selection.recommended_center.lat, selection.recommended_center.lon))
            }

            h4 { "Nearby from " (reference_builder) }
            @if selection.highlighted.is_empty() {
                p class="muted" { "No nearby properties from this builder in " (selection.clicked.area) "." }
            } @else {
                ol class="highlighted" {
                    @for property in &selection.highlighted {
                        li {
                            a href=(format!("#listing-{}", property.id)) {
                                span class="primary" { "Property ID: " (property.id) }
                                span class="secondary" { "Builder: " (property.builder) }
                            }
                        }
                    }
                }
            }

            h4 { "Nearest parking" }
            @match &selection.nearest_parking {
                Some(parking) => p class="parking" data-id=(parking.id) { (parking.name) },
                None => p class="muted" { "No parking facilities on file." },
            }

            a href=(format!("/listing/{}", selection.clicked.id)) { "View details" }
        }
    }
}
