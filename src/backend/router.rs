//! Route configuration for the service.
//! Defines the validation route and wraps it with CORS and request logging.

use axum::{middleware, routing::post, Router};
use http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::backend::handlers::validate;
use crate::backend::middlewares::{log_requests, preflight_no_content};
use crate::config::Config;

/// Builds the main router and its middlewares
pub fn get_router(config: &Config) -> Router {
    // Only the configured front-end may call us from a browser
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(config.allowed_origin.clone()))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/validate", post(validate))
        .layer(cors)
        .layer(middleware::from_fn(preflight_no_content))
        .layer(middleware::from_fn(log_requests))
}
