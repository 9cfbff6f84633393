mod cache;
mod client;

pub use cache::GeocodeCache;
pub use client::Geocoder;
