// src/dataset/loader.rs

use crate::dataset::record::{
    bath_label, has_central_ac, latest_price, price_label, PropertyRecord, SaleRecord,
};
use crate::dataset::schema::Schema;
use crate::dataset::DatasetError;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Loads and normalizes the property dataset.
///
/// Every input row produces exactly one `PropertyRecord`; rows are never
/// dropped or duplicated here. Absent numeric cells fall back to 0, absent
/// heat categories to "Unknown", and the derived fields (latest price,
/// labels, central AC flag) are computed per row.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyRecord>, DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .from_path(&path)
        .map_err(|e| DatasetError::Io(e.to_string()))?;

    let headers = rdr
        .headers()
        .map_err(|e| DatasetError::Csv(e.to_string()))?
        .clone();
    let schema = Schema::from_headers(&headers)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|e| DatasetError::Csv(e.to_string()))?;
        records.push(normalize_row(&schema, &row));
    }

    Ok(records)
}

/// Builds one normalized record from a raw row. Total: every cell has a
/// defined fallback, so a sparse row still yields a full record.
fn normalize_row(schema: &Schema, row: &StringRecord) -> PropertyRecord {
    let sales = read_sales(schema, row);
    let full_baths = parse_count(schema.cell(row, "Total Full Baths"));
    let half_baths = parse_count(schema.cell(row, "Total Half Baths"));
    let ac_type = schema.cell(row, "AC Type:").to_string();

    let latest = latest_price(&sales);
    let central_ac = has_central_ac(&ac_type);

    PropertyRecord {
        address: schema.cell(row, "Address").to_string(),
        pincode: schema.cell(row, "Pincode").to_string(),
        bedrooms: parse_count(schema.cell(row, "Total Bedrooms")),
        full_baths,
        half_baths,
        living_area: parse_opt_f64(schema.cell(row, "Living Area:")),
        style: schema.cell(row, "Style:").to_string(),
        year_built: parse_count(schema.cell(row, "Year Built:")),
        fireplaces: parse_count(schema.cell(row, "Fireplaces")),
        assessed_value: parse_money(schema.cell(row, "Assessed Value")).unwrap_or(0),
        heat_type: category_or_unknown(schema.cell(row, "Heat Type:")),
        heat_fuel: category_or_unknown(schema.cell(row, "Heat Fuel:")),
        ac_type,
        sales,
        latitude: parse_opt_f64(schema.cell(row, "Latitude")),
        longitude: parse_opt_f64(schema.cell(row, "Longitude")),
        latest_price: latest,
        price_label: price_label(latest),
        bath_label: bath_label(full_baths, half_baths),
        central_ac,
    }
}

fn read_sales(schema: &Schema, row: &StringRecord) -> [SaleRecord; 5] {
    std::array::from_fn(|i| {
        let slot = i + 1;
        SaleRecord {
            owner: non_empty(schema.cell(row, &format!("Owner_{slot}"))),
            price: parse_money(schema.cell(row, &format!("Sale_Price_{slot}"))),
            date: non_empty(schema.cell(row, &format!("Sale_Date_{slot}"))),
        }
    })
}

fn non_empty(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

fn category_or_unknown(cell: &str) -> String {
    if cell.is_empty() {
        "Unknown".to_string()
    } else {
        cell.to_string()
    }
}

/// Counts come out of the export as float-formatted integers ("3.0").
/// Unparseable or empty cells read as 0.
fn parse_count(cell: &str) -> u32 {
    parse_opt_f64(cell).map(|v| v.max(0.0) as u32).unwrap_or(0)
}

/// Whole-currency amounts, also tolerating a trailing ".0".
fn parse_money(cell: &str) -> Option<i64> {
    parse_opt_f64(cell).map(|v| v.round() as i64)
}

fn parse_opt_f64(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok()
}
