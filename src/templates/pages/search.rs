// templates/pages/search.rs

use crate::dataset::PropertyRecord;
use crate::search::{FilterSpec, SortKey};
use crate::templates::{
    components::{filter_form, property_card, property_map, FilterOptions, MapMarker},
    desktop_layout,
};
use maud::{html, Markup};

pub struct SearchVm<'a> {
    pub options: &'a FilterOptions,
    pub spec: &'a FilterSpec,
    pub sort: SortKey,
    pub markers: Vec<MapMarker>,
    pub results: Vec<&'a PropertyRecord>,
}

/// Results page: map of the matches that have coordinates, then the full
/// ordered list as cards. Zero matches is a warning, never an error page.
pub fn search_page(vm: &SearchVm) -> Markup {
    desktop_layout(
        "FairVision - Property Search",
        html! {
            div class="layout" {
                (filter_form(vm.options, vm.spec, vm.sort))
                main class="results" {
                    h2 { "Property Locations" }
                    (property_map(&vm.markers))

                    h2 { "Available Properties" }
                    @if vm.results.is_empty() {
                        p class="warning" { "No properties match your criteria" }
                    } @else {
                        p { strong { (vm.results.len()) " properties found" } }
                        @for record in &vm.results {
                            (property_card(record))
                        }
                    }
                }
            }
        },
    )
}
