//! Global constants and configuration defaults.

pub const HTTP_PORT: u16 = 8080; // Default HTTP port
pub const BIND_ADDR: &str = "0.0.0.0"; // Default listen address
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000"; // Front-end allowed by CORS

pub const HTTP_PORT_VAR: &str = "VALIDATION_HTTP_PORT";
pub const BIND_ADDR_VAR: &str = "VALIDATION_BIND_ADDR";
pub const ALLOWED_ORIGIN_VAR: &str = "VALIDATION_ALLOWED_ORIGIN";

pub const REQUEST_ID_HEADER: &str = "x-request-id";
