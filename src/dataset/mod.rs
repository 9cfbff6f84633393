mod error;
mod loader;
pub mod record;
pub mod schema;

pub use error::DatasetError;
pub use loader::load_dataset;
pub use record::PropertyRecord;
