//! HTTP layer: the `/validate` handler, its request and response types, the
//! router and its middlewares.
pub mod handlers;
pub mod models;
mod middlewares;
pub mod router;
