use crate::dataset::PropertyRecord;
use crate::search::{FilterSpec, SortKey};
use maud::{html, Markup};

/// Select options derived from the loaded dataset: distinct category values
/// and the price bounds for the range inputs (in $k, matching the form).
pub struct FilterOptions {
    pub styles: Vec<String>,
    pub heat_types: Vec<String>,
    pub heat_fuels: Vec<String>,
    pub min_price_k: i64,
    pub max_price_k: i64,
}

impl FilterOptions {
    pub fn from_records(records: &[PropertyRecord]) -> Self {
        let min_price = records.iter().map(|r| r.latest_price).min().unwrap_or(0);
        let max_price = records.iter().map(|r| r.latest_price).max().unwrap_or(0);

        Self {
            styles: distinct(records, |r| &r.style),
            heat_types: distinct(records, |r| &r.heat_type),
            heat_fuels: distinct(records, |r| &r.heat_fuel),
            min_price_k: min_price / 1000,
            max_price_k: max_price / 1000,
        }
    }
}

fn distinct<F>(records: &[PropertyRecord], field: F) -> Vec<String>
where
    F: Fn(&PropertyRecord) -> &String,
{
    let mut values: Vec<String> = Vec::new();
    for record in records {
        let value = field(record);
        if !value.is_empty() && !values.contains(value) {
            values.push(value.clone());
        }
    }
    values.sort();
    values
}

/// The filter sidebar. Re-renders with the active spec so a submitted
/// search keeps its selections.
pub fn filter_form(options: &FilterOptions, spec: &FilterSpec, sort: SortKey) -> Markup {
    let (price_lo_k, price_hi_k) = match spec.price_range {
        Some((lo, hi)) => (Some(lo / 1000), Some(hi / 1000)),
        None => (None, None),
    };

    html! {
        aside class="sidebar" {
            form action="/search" method="get" {
                h3 { "Filters" }

                h4 { "Property Details" }
                label for="bedrooms" { "Minimum bedrooms" }
                select name="bedrooms" id="bedrooms" {
                    option value="" selected[spec.min_bedrooms == 0] { "Any" }
                    @for n in 1..=5u32 {
                        option value=(n) selected[spec.min_bedrooms == n] { (n) "+" }
                    }
                }

                label for="bathrooms" { "Minimum full bathrooms" }
                select name="bathrooms" id="bathrooms" {
                    option value="" selected[spec.min_full_baths == 0] { "Any" }
                    @for n in 1..=3u32 {
                        option value=(n) selected[spec.min_full_baths == n] { (n) "+" }
                    }
                }

                label for="min_sqft" { "Minimum sqft" }
                input type="number" name="min_sqft" id="min_sqft" min="0" step="10"
                    value=(spec.min_sqft as i64);

                label for="types" { "Property Type" }
                select name="types" id="types" multiple size="4" {
                    @for style in &options.styles {
                        option value=(style) selected[spec.property_types.contains(style)] { (style) }
                    }
                }

                h4 { "Location & Price" }
                label for="pincode" { "ZIP code" }
                input type="text" name="pincode" id="pincode" value=(spec.pincode_prefix);

                label for="min_price_k" { "Last Sale Price Range ($k)" }
                div style="display: flex; gap: 6px;" {
                    input type="number" name="min_price_k" id="min_price_k" step="10"
                        placeholder=(options.min_price_k)
                        value=[price_lo_k];
                    input type="number" name="max_price_k" id="max_price_k" step="10"
                        placeholder=(options.max_price_k)
                        value=[price_hi_k];
                }

                h4 { "HVAC Features" }
                label for="central_ac" { "Central AC" }
                select name="central_ac" id="central_ac" {
                    @for choice in ["Any", "Yes", "No"] {
                        option value=(choice) selected[spec.central_ac.as_str() == choice] { (choice) }
                    }
                }

                label for="heat_types" { "Heat Type" }
                select name="heat_types" id="heat_types" multiple size="4" {
                    @for value in &options.heat_types {
                        option value=(value) selected[spec.heat_types.contains(value)] { (value) }
                    }
                }

                label for="heat_fuels" { "Heat Fuel" }
                select name="heat_fuels" id="heat_fuels" multiple size="4" {
                    @for value in &options.heat_fuels {
                        option value=(value) selected[spec.heat_fuels.contains(value)] { (value) }
                    }
                }

                h4 { "Additional Features" }
                label {
                    input type="checkbox" name="fireplace" value="on"
                        checked[spec.fireplace_required]
                        style="width: auto;";
                    " Fireplace"
                }

                label for="sort" { "Sort by" }
                select name="sort" id="sort" {
                    @for key in SortKey::ALL {
                        option value=(key.as_str()) selected[sort == key] { (key.label()) }
                    }
                }

                button type="submit" { "Apply Filters" }
            }
        }
    }
}
