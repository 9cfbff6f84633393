use crate::dataset::PropertyRecord;
use crate::errors::{ResultResp, ServerError};
use crate::geocode::{GeocodeCache, Geocoder};
use crate::predict::{PredictionClient, PredictionInput};
use crate::responses::html_response;
use crate::search::{search, CentralAc, FilterSpec, SortKey};
use crate::templates::components::{FilterOptions, MapMarker};
use crate::templates::pages;
use astra::Request;
use std::collections::HashSet;
use std::io::Read;

/// Everything a request handler needs. Built once at startup; the record
/// set is immutable for the life of the process and only the geocode cache
/// ever mutates.
pub struct AppState {
    pub records: Vec<PropertyRecord>,
    pub options: FilterOptions,
    pub geocoder: Geocoder,
    pub geocode_cache: GeocodeCache,
    pub predictor: PredictionClient,
}

impl AppState {
    pub fn new(records: Vec<PropertyRecord>) -> Result<Self, reqwest::Error> {
        let options = FilterOptions::from_records(&records);

        Ok(Self {
            records,
            options,
            geocoder: Geocoder::new()?,
            geocode_cache: GeocodeCache::new(),
            predictor: PredictionClient::new()?,
        })
    }
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(&state.options)),
        ("GET", "/search") => {
            let query = req.uri().query().unwrap_or("").to_string();
            search_handler(&query, state)
        }
        ("GET", "/predict") => html_response(pages::predict_page(&pages::PredictVm::default())),
        ("POST", "/predict") => predict_handler(&mut req, state),
        _ => Err(ServerError::NotFound),
    }
}

/// Runs the filter/sort engine over the loaded records and renders the
/// results page, geocoding any matched rows that lack coordinates.
fn search_handler(query: &str, state: &AppState) -> ResultResp {
    let params = parse_query(query);
    let spec = filter_spec_from(&params);
    let sort = SortKey::parse(first(&params, "sort").unwrap_or(""));

    let results = search(&state.records, &spec, sort);
    let markers = build_markers(state, &results);

    html_response(pages::search_page(&pages::SearchVm {
        options: &state.options,
        spec: &spec,
        sort,
        markers,
        results,
    }))
}

/// Map feed for the current result set. Records carrying coordinates use
/// them as-is; the rest go through one geocode batch. Anything still
/// unresolved is simply absent from the map (the list keeps it).
fn build_markers(state: &AppState, results: &[&PropertyRecord]) -> Vec<MapMarker> {
    let missing: Vec<&str> = results
        .iter()
        .filter(|r| !r.has_coordinates())
        .map(|r| r.address.as_str())
        .collect();

    let resolved = if missing.is_empty() {
        Vec::new()
    } else {
        eprintln!("🗺️ Geocoding {} addresses", missing.len());
        state.geocoder.resolve_batch(&state.geocode_cache, &missing)
    };

    let mut resolved_iter = resolved.into_iter();
    let mut markers = Vec::new();

    for record in results {
        let coords = match (record.latitude, record.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            // Exactly the records counted into `missing`, in order.
            _ => resolved_iter.next().flatten(),
        };

        if let Some((lat, lng)) = coords {
            markers.push(MapMarker {
                lat,
                lng,
                address: record.address.clone(),
                price: record.price_label.clone(),
                bedrooms: record.bedrooms,
                baths: record.bath_label.clone(),
            });
        }
    }

    markers
}

/// Validates and forwards the prediction form, then re-renders it with the
/// result or a single warning. Missing location never reaches the service.
fn predict_handler(req: &mut Request, state: &AppState) -> ResultResp {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut raw)
        .map_err(|_| ServerError::BadRequest("Unreadable request body".into()))?;

    let body = String::from_utf8_lossy(&raw);
    let params = parse_query(&body);

    let input = PredictionInput {
        square_feet: first(&params, "square_feet")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0),
        bedrooms: first(&params, "bedrooms")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
        bathrooms: first(&params, "bathrooms")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
        location: first(&params, "location").unwrap_or("").trim().to_string(),
    };

    let mut vm = pages::PredictVm {
        square_feet: Some(input.square_feet),
        bedrooms: Some(input.bedrooms),
        bathrooms: Some(input.bathrooms),
        location: input.location.clone(),
        ..Default::default()
    };

    match state.predictor.predict(&input) {
        Ok(price) => vm.predicted_price = Some(price),
        Err(err) => {
            eprintln!("⚠️ Prediction request failed: {err:?}");
            vm.warning = Some(err.to_string());
        }
    }

    html_response(pages::predict_page(&vm))
}

/// Builds the filter specification from the query pairs. Every absent or
/// unparseable value falls back to the "no restriction" sentinel.
fn filter_spec_from(params: &[(String, String)]) -> FilterSpec {
    let min_k: Option<i64> = first(params, "min_price_k").and_then(|v| v.parse().ok());
    let max_k: Option<i64> = first(params, "max_price_k").and_then(|v| v.parse().ok());

    let price_range = match (min_k, max_k) {
        (None, None) => None,
        (lo, hi) => Some((
            lo.map_or(i64::MIN, |v| v.saturating_mul(1000)),
            hi.map_or(i64::MAX, |v| v.saturating_mul(1000)),
        )),
    };

    FilterSpec {
        min_bedrooms: first(params, "bedrooms")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
        min_full_baths: first(params, "bathrooms")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
        min_sqft: first(params, "min_sqft")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0),
        property_types: all(params, "types"),
        pincode_prefix: first(params, "pincode").unwrap_or("").trim().to_string(),
        price_range,
        central_ac: CentralAc::parse(first(params, "central_ac").unwrap_or("Any")),
        heat_types: all(params, "heat_types"),
        heat_fuels: all(params, "heat_fuels"),
        fireplace_required: first(params, "fireplace").is_some(),
    }
}

fn first<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Multiselects submit one pair per selected option.
fn all(params: &[(String, String)], key: &str) -> HashSet<String> {
    params
        .iter()
        .filter(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.clone())
        .collect()
}

/// Splits a query string or form body into decoded key/value pairs.
/// Repeated keys are kept; multiselect parsing depends on it.
pub(crate) fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let value = parts.next().unwrap_or("");
            Some((url_decode(key), url_decode(value)))
        })
        .collect()
}

/// Minimal form decoding: '+' is a space, %XX is a byte.
fn url_decode(value: &str) -> String {
    let mut bytes = Vec::with_capacity(value.len());
    let mut iter = value.bytes();

    while let Some(b) = iter.next() {
        match b {
            b'+' => bytes.push(b' '),
            b'%' => {
                let hi = iter.next();
                let lo = iter.next();
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        let pair = [hi, lo];
                        match u8::from_str_radix(std::str::from_utf8(&pair).unwrap_or(""), 16) {
                            Ok(byte) => bytes.push(byte),
                            Err(_) => {
                                bytes.push(b'%');
                                bytes.push(hi);
                                bytes.push(lo);
                            }
                        }
                    }
                    _ => bytes.push(b'%'),
                }
            }
            other => bytes.push(other),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
