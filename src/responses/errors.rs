use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

/// Fallback error page for anything a handler could not recover from.
pub fn html_error_response(err: ServerError) -> Response {
    let status = match err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        _ => 500,
    };

    let body = format!("<h1>Error</h1><p>{}</p>", err);

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
