// templates/pages/home.rs

use crate::search::{FilterSpec, SortKey};
use crate::templates::{
    components::{filter_form, FilterOptions},
    desktop_layout,
};
use maud::{html, Markup};

/// Landing page: the filter sidebar with defaults and a prompt to search.
pub fn home_page(options: &FilterOptions) -> Markup {
    desktop_layout(
        "FairVision - Property Search",
        html! {
            div class="layout" {
                (filter_form(options, &FilterSpec::default(), SortKey::default()))
                main class="results" {
                    p class="info" { "Please apply filters to see properties" }
                }
            }
        },
    )
}
