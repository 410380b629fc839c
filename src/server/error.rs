//! Server error types and response handling

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
    response::IntoResponse,
};

use crate::html::escape;

/// Errors that can occur while answering a request
#[derive(Debug)]
pub(crate) enum ServerError {
    /// No route matched; the router outlet has no views yet
    NotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response<Body> {
        let (status, body) = match self {
            ServerError::NotFound(path) => {
                tracing::debug!("No page for {}", path);
                (
                    StatusCode::NOT_FOUND,
                    format!(
                        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Page not found</title></head>\n<body><h1>Page not found</h1><p>Nothing lives at <code>{}</code>.</p><p><a href=\"/\">Back to the homepage</a></p></body></html>\n",
                        escape(&path)
                    ),
                )
            }
        };

        Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(body))
            .unwrap_or_else(|_| Response::new(Body::from("Internal error building error response")))
    }
}
