// src/geocode/client.rs

use crate::geocode::cache::GeocodeCache;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str = "fairvision_app";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on lookups in flight per batch.
const MAX_WORKERS: usize = 5;

/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimHit {
    lat: String,
    lon: String,
}

pub struct Geocoder {
    client: Client,
}

impl Geocoder {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(LOOKUP_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    /// Resolves a single address to (latitude, longitude).
    ///
    /// Only the street portion before the first comma goes into the query;
    /// the rest of the address adds noise the service handles badly. Every
    /// failure mode (timeout, non-success status, empty result, parse error)
    /// degrades to `None` so a bad address can never fail a batch.
    pub fn lookup(&self, address: &str) -> Option<(f64, f64)> {
        let street = street_fragment(address);
        if street.is_empty() {
            return None;
        }

        let resp = self
            .client
            .get(NOMINATIM_URL)
            .query(&[("q", street), ("format", "json"), ("limit", "1")])
            .send()
            .ok()?;

        if !resp.status().is_success() {
            return None;
        }

        let hits: Vec<NominatimHit> = resp.json().ok()?;
        let hit = hits.into_iter().next()?;

        let lat = hit.lat.parse().ok()?;
        let lon = hit.lon.parse().ok()?;
        Some((lat, lon))
    }

    /// Resolves a batch of addresses through the cache, at most
    /// [`MAX_WORKERS`] lookups in flight at once.
    ///
    /// The output is parallel to the input: `result[i]` belongs to
    /// `addresses[i]`, with `None` for anything that did not resolve. Blocks
    /// until the whole batch is done.
    pub fn resolve_batch(
        &self,
        cache: &GeocodeCache,
        addresses: &[&str],
    ) -> Vec<Option<(f64, f64)>> {
        let mut coords: Vec<Option<(f64, f64)>> = vec![None; addresses.len()];
        if addresses.is_empty() {
            return coords;
        }

        let next = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel();

        thread::scope(|scope| {
            for _ in 0..MAX_WORKERS.min(addresses.len()) {
                let tx = tx.clone();
                let next = &next;
                scope.spawn(move || loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= addresses.len() {
                        break;
                    }
                    let result = cache.get_or_fetch(addresses[i], |a| self.lookup(a));
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                });
            }
            drop(tx);

            // Workers report (index, result); the channel closes once the
            // last worker hangs up.
            for (i, result) in rx {
                coords[i] = result;
            }
        });

        coords
    }
}

/// Street-level portion of a comma-separated address.
pub(crate) fn street_fragment(address: &str) -> &str {
    address.split(',').next().unwrap_or(address).trim()
}
