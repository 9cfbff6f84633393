// src/dataset/record.rs

use chrono::NaiveDateTime;

/// One (owner, sale price, sale date) slot from the assessor export.
/// Slot 1 holds the most recent sale; the export orders slots newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleRecord {
    pub owner: Option<String>,
    pub price: Option<i64>,
    pub date: Option<String>,
}

impl SaleRecord {
    /// Date portion suitable for display. The export writes timestamps like
    /// `2021-04-05 00:00:00`; show just the calendar date, falling back to
    /// the first whitespace-delimited token for anything unparseable.
    pub fn display_date(&self) -> Option<String> {
        let raw = self.date.as_deref()?;
        match NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            Ok(dt) => Some(dt.format("%Y-%m-%d").to_string()),
            Err(_) => raw.split_whitespace().next().map(str::to_string),
        }
    }
}

/// One listing, flattened and normalized from a dataset row.
/// This is the typed record behind both the list view and the map; all
/// derived fields are computed once at load and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub address: String,
    pub pincode: String,
    pub bedrooms: u32,
    pub full_baths: u32,
    pub half_baths: u32,
    pub living_area: Option<f64>,
    pub style: String,
    pub year_built: u32,
    pub fireplaces: u32,
    pub assessed_value: i64,
    pub heat_type: String,
    pub heat_fuel: String,
    pub ac_type: String,
    pub sales: [SaleRecord; 5],
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    // Derived at load.
    pub latest_price: i64,
    pub price_label: String,
    pub bath_label: String,
    pub central_ac: bool,
}

impl PropertyRecord {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Street portion of the comma-separated address.
    pub fn street(&self) -> &str {
        self.address.split(',').next().unwrap_or(&self.address).trim()
    }

    /// Locality portion (everything after the first comma), if present.
    pub fn locality(&self) -> Option<&str> {
        self.address
            .split_once(',')
            .map(|(_, rest)| rest.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn central_ac_label(&self) -> &'static str {
        central_ac_label(self.central_ac)
    }
}

/// First non-absent price among the five sale slots, scanned slot 1 to 5.
/// Slot 1 is the most recent sale, so the first hit is the latest price.
/// All-absent means the property has no recorded sale; that reads as 0.
pub fn latest_price(sales: &[SaleRecord; 5]) -> i64 {
    sales.iter().find_map(|s| s.price).unwrap_or(0)
}

/// Currency label for card and tooltip display: `$250.0k` at or above a
/// thousand, plain `$950` below.
pub fn price_label(value: i64) -> String {
    if value >= 1000 {
        format!("${:.1}k", value as f64 / 1000.0)
    } else {
        format!("${value}")
    }
}

/// `"2 Full, 1 Half"` style bath summary.
pub fn bath_label(full: u32, half: u32) -> String {
    format!("{full} Full, {half} Half")
}

/// The export's `AC Type:` column is a free category; only the exact
/// literal `Central` counts as central AC.
pub fn has_central_ac(ac_type: &str) -> bool {
    ac_type == "Central"
}

pub fn central_ac_label(central: bool) -> &'static str {
    if central {
        "Yes"
    } else {
        "No"
    }
}

/// Thousands-separated integer for the owner history and assessed value,
/// e.g. `1250000` -> `1,250,000`.
pub fn thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if negative {
        format!("-{out}")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_with_prices(prices: [Option<i64>; 5]) -> [SaleRecord; 5] {
        prices.map(|price| SaleRecord {
            owner: None,
            price,
            date: None,
        })
    }

    #[test]
    fn latest_price_takes_first_filled_slot() {
        let sales = sales_with_prices([None, Some(250_000), None, Some(180_000), None]);
        assert_eq!(latest_price(&sales), 250_000);

        let sales = sales_with_prices([Some(300_000), None, None, None, None]);
        assert_eq!(latest_price(&sales), 300_000);
    }

    #[test]
    fn latest_price_defaults_to_zero_when_all_slots_absent() {
        let sales = sales_with_prices([None; 5]);
        assert_eq!(latest_price(&sales), 0);
    }

    #[test]
    fn price_label_formats_thousands_with_one_decimal() {
        assert_eq!(price_label(250_000), "$250.0k");
        assert_eq!(price_label(300_000), "$300.0k");
        assert_eq!(price_label(12_345), "$12.3k");
        assert_eq!(price_label(1000), "$1.0k");
    }

    #[test]
    fn price_label_below_a_thousand_has_no_decimals() {
        assert_eq!(price_label(0), "$0");
        assert_eq!(price_label(999), "$999");
    }

    #[test]
    fn bath_label_reads_full_and_half() {
        assert_eq!(bath_label(2, 1), "2 Full, 1 Half");
        assert_eq!(bath_label(0, 0), "0 Full, 0 Half");
    }

    #[test]
    fn only_the_exact_central_literal_counts_as_central_ac() {
        assert!(has_central_ac("Central"));
        assert!(!has_central_ac("central"));
        assert!(!has_central_ac("Central Air"));
        assert!(!has_central_ac("Window"));
        assert!(!has_central_ac(""));
    }

    #[test]
    fn central_ac_label_is_yes_or_no() {
        assert_eq!(central_ac_label(true), "Yes");
        assert_eq!(central_ac_label(false), "No");
    }

    #[test]
    fn display_date_truncates_export_timestamps() {
        let sale = SaleRecord {
            owner: Some("SMITH JOHN".into()),
            price: Some(250_000),
            date: Some("2021-04-05 00:00:00".into()),
        };
        assert_eq!(sale.display_date().as_deref(), Some("2021-04-05"));

        let odd = SaleRecord {
            date: Some("Apr 2021".into()),
            ..Default::default()
        };
        assert_eq!(odd.display_date().as_deref(), Some("Apr"));

        assert_eq!(SaleRecord::default().display_date(), None);
    }

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1_250_000), "1,250,000");
    }

    #[test]
    fn street_and_locality_split_on_first_comma() {
        let record = PropertyRecord {
            address: "12 Oak St, Springfield, MA".into(),
            pincode: "01101".into(),
            bedrooms: 3,
            full_baths: 2,
            half_baths: 0,
            living_area: Some(1500.0),
            style: "Colonial".into(),
            year_built: 1978,
            fireplaces: 1,
            assessed_value: 210_000,
            heat_type: "Forced Air".into(),
            heat_fuel: "Gas".into(),
            ac_type: "Central".into(),
            sales: Default::default(),
            latitude: None,
            longitude: None,
            latest_price: 0,
            price_label: "$0".into(),
            bath_label: "2 Full, 0 Half".into(),
            central_ac: true,
        };

        assert_eq!(record.street(), "12 Oak St");
        assert_eq!(record.locality(), Some("Springfield, MA"));
    }
}
