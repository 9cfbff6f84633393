// src/predict/mod.rs
//
// Thin client for the local price-prediction service. One request, one
// number back, no retries.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Duration;

const PREDICTION_ENDPOINT: &str = "http://127.0.0.1:8000/predict";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum PredictError {
    /// The form came in without a location; caught before any HTTP call.
    MissingLocation,
    /// Network failure or non-success status. The detail is for the log;
    /// the user only ever sees a generic connection warning.
    Connection(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::MissingLocation => write!(f, "Please enter a location"),
            PredictError::Connection(_) => {
                write!(f, "Could not reach the prediction service")
            }
        }
    }
}

impl Error for PredictError {}

/// The four user inputs, as collected from the form.
#[derive(Debug, Clone)]
pub struct PredictionInput {
    pub square_feet: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub location: String,
}

#[derive(Serialize)]
struct PredictionRequest<'a> {
    square_feet: f64,
    bedrooms: u32,
    bathrooms: u32,
    location: &'a str,
}

#[derive(Deserialize)]
struct PredictionResponse {
    predicted_price: f64,
}

pub struct PredictionClient {
    client: Client,
    endpoint: String,
}

impl PredictionClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_endpoint(PREDICTION_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Validates the input, posts it to the prediction endpoint, and returns
    /// the predicted price. An empty location never leaves the process.
    pub fn predict(&self, input: &PredictionInput) -> Result<f64, PredictError> {
        if input.location.trim().is_empty() {
            return Err(PredictError::MissingLocation);
        }

        let body = PredictionRequest {
            square_feet: input.square_feet,
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            location: input.location.trim(),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| PredictError::Connection(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PredictError::Connection(format!("HTTP {status}")));
        }

        let parsed: PredictionResponse = resp
            .json()
            .map_err(|e| PredictError::Connection(e.to_string()))?;

        Ok(parsed.predicted_price)
    }
}
