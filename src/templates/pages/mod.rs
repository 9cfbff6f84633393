pub mod home;
pub mod predict;
pub mod search;

pub use home::home_page;
pub use predict::{predict_page, PredictVm};
pub use search::{search_page, SearchVm};
