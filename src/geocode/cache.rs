// src/geocode/cache.rs

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Resolved coordinates stay valid for a day before we ask the service again.
pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct CacheEntry {
    coords: Option<(f64, f64)>,
    inserted_at: Instant,
}

/// Address-keyed geocoding cache, shared across all request threads.
///
/// Failed lookups are cached as `None` too; an address that did not resolve
/// will not be retried against the service until its entry expires. Entries
/// are immutable once written and only overwritten on an expiry re-fetch.
pub struct GeocodeCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl GeocodeCache {
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached result for an address, if present and still valid.
    /// The outer `Option` is the cache hit; the inner one is the lookup
    /// outcome (a cached failure is a hit that resolves to nothing).
    pub fn get(&self, address: &str) -> Option<Option<(f64, f64)>> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(address)
            .filter(|entry| entry.inserted_at.elapsed() < self.ttl)
            .map(|entry| entry.coords)
    }

    /// Cache-through resolution: a valid entry short-circuits, otherwise
    /// `fetch` runs and its result (success or failure) is stored.
    ///
    /// The lock is not held across `fetch`, so concurrent misses on the same
    /// address may both query; the later insert simply overwrites the earlier
    /// identical result.
    pub fn get_or_fetch<F>(&self, address: &str, fetch: F) -> Option<(f64, f64)>
    where
        F: FnOnce(&str) -> Option<(f64, f64)>,
    {
        if let Some(hit) = self.get(address) {
            return hit;
        }

        let coords = fetch(address);

        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            address.to_string(),
            CacheEntry {
                coords,
                inserted_at: Instant::now(),
            },
        );

        coords
    }
}

impl Default for GeocodeCache {
    fn default() -> Self {
        Self::new()
    }
}
