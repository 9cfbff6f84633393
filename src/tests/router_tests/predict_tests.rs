// src/tests/router_tests/predict_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, make_state};
use astra::Body;
use http::Method;

fn post_form(body: &str) -> astra::Request {
    http::Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::new(body.to_string()))
        .unwrap()
}

#[test]
fn predict_form_renders() {
    let state = make_state(Vec::new());

    let mut resp = handle(
        http::Request::builder()
            .method(Method::GET)
            .uri("/predict")
            .body(Body::empty())
            .unwrap(),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Square feet"));
    assert!(body.contains("Location"));
}

#[test]
fn empty_location_shows_a_validation_warning() {
    // The state's prediction endpoint is a dead port; if validation let this
    // request through, the page would show the connection warning instead.
    let state = make_state(Vec::new());

    let mut resp = handle(
        post_form("square_feet=1500&bedrooms=3&bathrooms=2&location="),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Please enter a location"));
    assert!(!body.contains("Could not reach the prediction service"));
}

#[test]
fn unreachable_service_degrades_to_one_generic_warning() {
    let state = make_state(Vec::new());

    let mut resp = handle(
        post_form("square_feet=1500&bedrooms=3&bathrooms=2&location=Springfield"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Could not reach the prediction service"));
    // The submitted values survive the round trip.
    assert!(body.contains("Springfield"));
    assert!(body.contains("1500"));
}
