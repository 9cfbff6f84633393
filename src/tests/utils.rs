use crate::dataset::record::{bath_label, has_central_ac, price_label};
use crate::dataset::PropertyRecord;
use crate::geocode::{GeocodeCache, Geocoder};
use crate::predict::PredictionClient;
use crate::router::AppState;
use crate::templates::components::FilterOptions;
use astra::Response;
use std::io::Read;

/// Builds request state around an in-memory record set. The prediction
/// endpoint points at a dead port so no test ever reaches a real service.
pub fn make_state(records: Vec<PropertyRecord>) -> AppState {
    let options = FilterOptions::from_records(&records);

    AppState {
        records,
        options,
        geocoder: Geocoder::new().expect("geocoder client"),
        geocode_cache: GeocodeCache::new(),
        predictor: PredictionClient::with_endpoint("http://127.0.0.1:9/predict")
            .expect("prediction client"),
    }
}

/// One fully derived in-memory listing.
pub fn listing(
    address: &str,
    bedrooms: u32,
    price: i64,
    ac_type: &str,
    coords: Option<(f64, f64)>,
) -> PropertyRecord {
    PropertyRecord {
        address: address.to_string(),
        pincode: "01101".to_string(),
        bedrooms,
        full_baths: 2,
        half_baths: 1,
        living_area: Some(1500.0),
        style: "Colonial".to_string(),
        year_built: 1980,
        fireplaces: 1,
        assessed_value: 200_000,
        heat_type: "Forced Air".to_string(),
        heat_fuel: "Gas".to_string(),
        ac_type: ac_type.to_string(),
        sales: Default::default(),
        latitude: coords.map(|(lat, _)| lat),
        longitude: coords.map(|(_, lng)| lng),
        latest_price: price,
        price_label: price_label(price),
        bath_label: bath_label(2, 1),
        central_ac: has_central_ac(ac_type),
    }
}

/// Drains a response body to a string.
pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("read response body");
    String::from_utf8_lossy(&bytes).into_owned()
}
