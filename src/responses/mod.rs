pub mod errors;
pub mod html;

pub use errors::html_error_response;
pub use html::html_response;
