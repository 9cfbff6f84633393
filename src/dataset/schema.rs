// src/dataset/schema.rs

use crate::dataset::DatasetError;
use csv::StringRecord;
use std::collections::HashMap;

/// Column names the dataset must carry. The assessor export uses these
/// exact headers, trailing colons included.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Address",
    "Pincode",
    "Total Bedrooms",
    "Total Full Baths",
    "Total Half Baths",
    "Living Area:",
    "Style:",
    "Year Built:",
    "Fireplaces",
    "Assessed Value",
    "Heat Type:",
    "Heat Fuel:",
    "AC Type:",
    "Latitude",
    "Longitude",
    "Owner_1",
    "Owner_2",
    "Owner_3",
    "Owner_4",
    "Owner_5",
    "Sale_Price_1",
    "Sale_Price_2",
    "Sale_Price_3",
    "Sale_Price_4",
    "Sale_Price_5",
    "Sale_Date_1",
    "Sale_Date_2",
    "Sale_Date_3",
    "Sale_Date_4",
    "Sale_Date_5",
];

/// Maps column names to positions in the header row, validated once at load.
/// All later row access goes through this, so a malformed file fails up front
/// instead of mid-render.
pub struct Schema {
    indices: HashMap<String, usize>,
}

impl Schema {
    /// Builds the schema from the CSV header row. Every column in
    /// [`REQUIRED_COLUMNS`] must be present.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let indices: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();

        for required in REQUIRED_COLUMNS {
            if !indices.contains_key(*required) {
                return Err(DatasetError::MissingColumn(required.to_string()));
            }
        }

        Ok(Self { indices })
    }

    /// Returns the raw cell for a validated column, trimmed.
    /// Panics only if `name` was never validated, which would be a bug in the
    /// loader, not in the input file.
    pub fn cell<'a>(&self, row: &'a StringRecord, name: &str) -> &'a str {
        let idx = self.indices[name];
        row.get(idx).unwrap_or("").trim()
    }
}
