// src/search/mod.rs
//
// Pure filter/sort over the loaded records. No state, no IO: one request in,
// one ordered subset out.

use crate::dataset::PropertyRecord;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Three-way central AC filter. `Any` is the no-restriction sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CentralAc {
    #[default]
    Any,
    Yes,
    No,
}

impl CentralAc {
    pub fn parse(value: &str) -> Self {
        match value {
            "Yes" => CentralAc::Yes,
            "No" => CentralAc::No,
            _ => CentralAc::Any,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CentralAc::Any => "Any",
            CentralAc::Yes => "Yes",
            CentralAc::No => "No",
        }
    }
}

/// The full set of user-selected predicates for one search request.
///
/// Each field has a sentinel meaning "no restriction": 0 for the minimums,
/// an empty set for the multiselects, an empty string for the ZIP prefix,
/// `None` for the price range, `Any` for central AC, and `false` for the
/// fireplace flag. An inactive filter never removes a record.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub min_bedrooms: u32,
    pub min_full_baths: u32,
    pub min_sqft: f64,
    pub property_types: HashSet<String>,
    pub pincode_prefix: String,
    /// Inclusive latest-price bounds in whole currency units.
    pub price_range: Option<(i64, i64)>,
    pub central_ac: CentralAc,
    pub heat_types: HashSet<String>,
    pub heat_fuels: HashSet<String>,
    pub fireplace_required: bool,
}

impl FilterSpec {
    /// True when the record satisfies every active predicate.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if self.min_bedrooms > 0 && record.bedrooms < self.min_bedrooms {
            return false;
        }
        if self.min_full_baths > 0 && record.full_baths < self.min_full_baths {
            return false;
        }
        // A record without a known living area fails an active sqft filter.
        if self.min_sqft > 0.0 && !record.living_area.is_some_and(|a| a >= self.min_sqft) {
            return false;
        }
        if !self.property_types.is_empty() && !self.property_types.contains(&record.style) {
            return false;
        }
        if !self.pincode_prefix.is_empty() && !record.pincode.starts_with(&self.pincode_prefix) {
            return false;
        }
        if let Some((lo, hi)) = self.price_range {
            if record.latest_price < lo || record.latest_price > hi {
                return false;
            }
        }
        match self.central_ac {
            CentralAc::Any => {}
            CentralAc::Yes => {
                if !record.central_ac {
                    return false;
                }
            }
            CentralAc::No => {
                if record.central_ac {
                    return false;
                }
            }
        }
        if !self.heat_types.is_empty() && !self.heat_types.contains(&record.heat_type) {
            return false;
        }
        if !self.heat_fuels.is_empty() && !self.heat_fuels.contains(&record.heat_fuel) {
            return false;
        }
        if self.fireplace_required && record.fireplaces == 0 {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    Bedrooms,
    Bathrooms,
    YearBuilt,
}

impl SortKey {
    pub fn parse(value: &str) -> Self {
        match value {
            "price_desc" => SortKey::PriceDesc,
            "bedrooms" => SortKey::Bedrooms,
            "bathrooms" => SortKey::Bathrooms,
            "year_built" => SortKey::YearBuilt,
            _ => SortKey::PriceAsc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Bedrooms => "bedrooms",
            SortKey::Bathrooms => "bathrooms",
            SortKey::YearBuilt => "year_built",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Bedrooms => "Bedrooms",
            SortKey::Bathrooms => "Bathrooms",
            SortKey::YearBuilt => "Year Built",
        }
    }

    pub const ALL: [SortKey; 5] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Bedrooms,
        SortKey::Bathrooms,
        SortKey::YearBuilt,
    ];
}

/// Applies the filter conjunction, then orders by the sort key.
///
/// The sort is stable, so records tied on the key keep their original
/// relative order. An empty result is a valid outcome, not an error.
pub fn search<'a>(
    records: &'a [PropertyRecord],
    spec: &FilterSpec,
    sort: SortKey,
) -> Vec<&'a PropertyRecord> {
    let mut matched: Vec<&PropertyRecord> =
        records.iter().filter(|r| spec.matches(r)).collect();

    match sort {
        SortKey::PriceAsc => matched.sort_by_key(|r| r.latest_price),
        SortKey::PriceDesc => matched.sort_by_key(|r| Reverse(r.latest_price)),
        SortKey::Bedrooms => matched.sort_by_key(|r| Reverse(r.bedrooms)),
        SortKey::Bathrooms => matched.sort_by_key(|r| Reverse(r.full_baths)),
        SortKey::YearBuilt => matched.sort_by_key(|r| Reverse(r.year_built)),
    }

    matched
}
