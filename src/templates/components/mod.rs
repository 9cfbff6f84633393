pub mod filter_form;
pub mod map;
pub mod property_card;

pub use filter_form::{filter_form, FilterOptions};
pub use map::{property_map, MapMarker};
pub use property_card::property_card;
