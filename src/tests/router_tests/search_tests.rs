// src/tests/router_tests/search_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, listing, make_state};
use astra::Body;
use http::Method;

fn get(uri: &str) -> astra::Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_renders_the_filter_form() {
    let state = make_state(vec![listing("1 Main St, Springfield", 3, 250_000, "Central", None)]);

    let mut resp = handle(get("/"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Apply Filters"));
    assert!(body.contains("Colonial")); // style option derived from the dataset
    assert!(body.contains("Please apply filters to see properties"));
}

#[test]
fn search_applies_filters_and_sort() {
    // All records carry coordinates so the handler never geocodes.
    let state = make_state(vec![
        listing("1 Cheap St, Springfield", 3, 100_000, "Central", Some((42.1, -72.5))),
        listing("2 Pricey Ave, Springfield", 3, 400_000, "Central", Some((42.2, -72.6))),
        listing("3 Small Rd, Springfield", 1, 200_000, "Central", Some((42.3, -72.7))),
        listing("4 NoAc Ln, Springfield", 4, 300_000, "Window", Some((42.4, -72.8))),
    ]);

    let mut resp = handle(
        get("/search?bedrooms=3&central_ac=Yes&sort=price_desc"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("2 properties found"));
    assert!(body.contains("1 Cheap St"));
    assert!(body.contains("2 Pricey Ave"));
    assert!(!body.contains("3 Small Rd"));
    assert!(!body.contains("4 NoAc Ln"));

    // price_desc puts the expensive one first.
    let pricey = body.find("2 Pricey Ave").unwrap();
    let cheap = body.find("1 Cheap St").unwrap();
    assert!(pricey < cheap);
}

#[test]
fn search_with_no_matches_warns_instead_of_failing() {
    let state = make_state(vec![listing(
        "1 Main St, Springfield",
        3,
        250_000,
        "Central",
        Some((42.1, -72.5)),
    )]);

    let mut resp = handle(get("/search?bedrooms=5"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("No properties match your criteria"));
}

#[test]
fn unresolvable_addresses_stay_in_the_list_but_off_the_map() {
    let state = make_state(vec![listing(
        "99 Unknown Way, Nowhere",
        3,
        250_000,
        "Central",
        None,
    )]);

    // Prime the cache with a failed lookup so the handler never goes out to
    // the network for this address.
    state
        .geocode_cache
        .get_or_fetch("99 Unknown Way, Nowhere", |_| None);

    let mut resp = handle(get("/search"), &state).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("No properties with valid location data"));
    assert!(body.contains("99 Unknown Way")); // still listed as a card
    assert!(body.contains("1 properties found"));
}

#[test]
fn records_with_coordinates_feed_the_map() {
    let state = make_state(vec![listing(
        "1 Main St, Springfield",
        3,
        250_000,
        "Central",
        Some((42.1015, -72.5898)),
    )]);

    let mut resp = handle(get("/search"), &state).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("42.1015"));
    assert!(body.contains("-72.5898"));
    assert!(!body.contains("No properties with valid location data"));
}

#[test]
fn unknown_routes_return_not_found() {
    let state = make_state(Vec::new());

    let result = handle(get("/nope"), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}
