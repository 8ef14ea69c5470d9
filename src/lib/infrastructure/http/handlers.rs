//! API handler modules

use std::any::Any;

use axum::{body::Body, http::Response, response::IntoResponse};
use tracing::error;

use super::errors::ApiError;

pub mod v1;

/// Catch panics, log them and return a generic 500 error
pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(panic = details, "request handler panicked");

    ApiError::new_500("Internal server error").into_response()
}
