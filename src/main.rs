use crate::dataset::load_dataset;
use crate::responses::html_error_response;
use crate::router::{handle, AppState};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod dataset;
mod errors;
mod geocode;
mod predict;
mod responses;
mod router;
mod search;
mod templates;

#[cfg(test)]
mod tests;

const DATASET_PATH: &str = "newdata.csv";

fn main() {
    // 1️⃣ Load and normalize the dataset. A missing file or column is fatal;
    // there is nothing to serve without it.
    let records = match load_dataset(DATASET_PATH) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("❌ Dataset load failed: {e}");
            std::process::exit(1);
        }
    };
    println!("✅ Loaded {} properties from {DATASET_PATH}", records.len());

    // 2️⃣ Shared state: records, derived filter options, geocoder + cache,
    // prediction client.
    let state = match AppState::new(records) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            eprintln!("❌ HTTP client init failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server.
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
