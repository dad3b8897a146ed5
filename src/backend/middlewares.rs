//! Middlewares wrapped around every route.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use log::info;
use uuid::Uuid;

use crate::consts::REQUEST_ID_HEADER;

/// Answers CORS preflight requests with `204 No Content` instead of the
/// `200` produced by the CORS layer. Must wrap the CORS layer.
pub async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_preflight = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;

    if is_preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}

/// Logs one line per request and tags the response with a request id
pub async fn log_requests(request: Request, next: Next) -> Response {
    let id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let mut response = next.run(request).await;

    info!("[{}] {} {} -> {} in {:?}", id, method, path, response.status().as_u16(), started.elapsed());
    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
