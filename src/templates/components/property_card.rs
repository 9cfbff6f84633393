use crate::dataset::record::thousands;
use crate::dataset::PropertyRecord;
use maud::{html, Markup};

/// One listing card: address split across two lines, the fact rows, a
/// collapsible owner history, and the (inert) action buttons.
pub fn property_card(record: &PropertyRecord) -> Markup {
    html! {
        div class="property-card" {
            h3 { (record.street()) }
            @if let Some(locality) = record.locality() {
                strong { (locality) }
            }

            div class="facts" {
                span { strong { "Beds: " } (record.bedrooms) }
                span { strong { "Baths: " } (record.bath_label) }
                span { strong { "Sqft: " } (sqft_text(record)) }
                span { strong { "Type: " } (or_na(&record.style)) }
            }
            div class="facts" {
                span { strong { "Year Built: " } (year_text(record)) }
                span { strong { "Fireplaces: " } (record.fireplaces) }
                span { strong { "Price: " } (record.price_label) }
            }
            div class="facts" {
                span { strong { "Heat Type: " } (record.heat_type) }
                span { strong { "Heat Fuel: " } (record.heat_fuel) }
                span { strong { "AC Type: " } (or_na(&record.ac_type)) }
                span { strong { "Central AC: " } (record.central_ac_label()) }
                span { strong { "Assessed Value: " } "$" (thousands(record.assessed_value)) }
            }

            details {
                summary { "Owner History" }
                (owner_history(record))
            }

            div class="actions" {
                button type="button" { "View Details" }
                button type="button" { "Save" }
                button type="button" { "Contact" }
            }
        }
    }
}

fn owner_history(record: &PropertyRecord) -> Markup {
    let entries: Vec<Markup> = record
        .sales
        .iter()
        .filter_map(|sale| {
            let owner = sale.owner.as_deref()?;
            let price = match sale.price {
                Some(p) => format!("${}", thousands(p)),
                None => "N/A".to_string(),
            };
            let date = sale.display_date().unwrap_or_else(|| "N/A".to_string());

            Some(html! {
                p { strong { (owner) } " - " (price) " on " (date) }
            })
        })
        .collect();

    html! {
        @if entries.is_empty() {
            p { "No owner history available" }
        } @else {
            @for entry in &entries {
                (entry)
            }
        }
    }
}

fn sqft_text(record: &PropertyRecord) -> String {
    match record.living_area {
        Some(area) => format!("{}", area as i64),
        None => "N/A".to_string(),
    }
}

fn year_text(record: &PropertyRecord) -> String {
    // 0 means the year was absent in the source data.
    if record.year_built == 0 {
        "N/A".to_string()
    } else {
        record.year_built.to_string()
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
