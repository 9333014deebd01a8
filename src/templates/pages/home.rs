// templates/pages/home.rs

use crate::domain::filter::FilterCriteria;
use crate::domain::listing::Listing;
use crate::domain::selection::{SelectionResult, Viewport};
use crate::templates::{
    components::{filter_form, listing_map, selection_panel},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub listings: &'a [Listing],
    pub total: usize,
    pub criteria: &'a FilterCriteria,
    pub selection: Option<&'a SelectionResult>,
    pub reference_builder: &'a str,
}

impl HomeVm<'_> {
    fn viewport(&self) -> Viewport {
        self.selection
            .map(SelectionResult::viewport)
            .unwrap_or_default()
    }

    fn export_href(&self) -> String {
        let query = self.criteria.to_query();
        if query.is_empty() {
            "/listings.xlsx".to_string()
        } else {
            format!("/listings.xlsx?{query}")
        }
    }
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="home" {
                section id="find-apartment" class="map-panel" {
                    (listing_map(vm.listings, vm.criteria, vm.selection, vm.viewport()))
                }

                aside class="filter-panel" {
                    h2 { "Filter Properties" }
                    (filter_form(vm.criteria))
                    p class="result-count" {
                        "Showing " strong { (vm.listings.len()) } " of " (vm.total) " listings."
                    }
                    a href=(vm.export_href()) class="download" { "Download as spreadsheet" }
                }

                @if let Some(selection) = vm.selection {
                    (selection_panel(selection, vm.reference_builder))
                }
            }
        },
    )
}
