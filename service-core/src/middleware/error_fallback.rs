//! Uniform JSON bodies for conditions the router answers on its own.

use crate::error::{AppError, INTERNAL_ERROR_DETAIL};
use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;

/// Router fallback for unmatched paths.
pub async fn not_found_fallback() -> AppError {
    AppError::NotFound
}

/// Rewrites the router's bare 405 into the JSON error shape, keeping `Allow`.
pub async fn method_not_allowed_middleware(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rewritten = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}

/// Handler for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %reason, "Handler panicked");
    AppError::InternalError(anyhow::anyhow!("handler panicked: {}", reason)).into_response()
}
