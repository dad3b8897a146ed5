//! Runtime configuration, read from the environment (and `.env` through
//! `dotenv` in `main`).

use std::net::{IpAddr, SocketAddr};

use anyhow::{bail, Context, Result};
use http::HeaderValue;
use url::Url;

use crate::consts::{
    ALLOWED_ORIGIN, ALLOWED_ORIGIN_VAR, BIND_ADDR, BIND_ADDR_VAR, HTTP_PORT, HTTP_PORT_VAR,
};

/// Settings the server needs at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Exact origin allowed by CORS, already serialized for the header
    pub allowed_origin: HeaderValue,
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, falling back to the defaults in
    /// [`crate::consts`] for unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get(HTTP_PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>()
                .with_context(|| format!("{} must be a port number, got '{}'", HTTP_PORT_VAR, raw))?,
            None => HTTP_PORT,
        };

        let ip = get(BIND_ADDR_VAR).unwrap_or_else(|| BIND_ADDR.to_string());
        let ip = ip.trim().parse::<IpAddr>()
            .with_context(|| format!("{} must be an IP address, got '{}'", BIND_ADDR_VAR, ip))?;

        let origin = get(ALLOWED_ORIGIN_VAR).unwrap_or_else(|| ALLOWED_ORIGIN.to_string());
        let allowed_origin = parse_origin(origin.trim())
            .with_context(|| format!("Invalid {}", ALLOWED_ORIGIN_VAR))?;

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            allowed_origin,
        })
    }
}

/// Normalizes an origin such as `HTTP://Example.com:80/` to `http://example.com`.
fn parse_origin(raw: &str) -> Result<HeaderValue> {
    let url = Url::parse(raw).with_context(|| format!("'{}' is not a URL", raw))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("origin '{}' must use http or https", raw);
    }
    if url.host().is_none() {
        bail!("origin '{}' has no host", raw);
    }

    let serialized = url.origin().ascii_serialization();
    HeaderValue::from_str(&serialized)
        .with_context(|| format!("origin '{}' is not a valid header value", serialized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.allowed_origin, "http://localhost:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (HTTP_PORT_VAR, " 9090 "),
            (BIND_ADDR_VAR, "127.0.0.1"),
            (ALLOWED_ORIGIN_VAR, "https://denuncias.example.org"),
        ]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:9090".parse::<SocketAddr>().unwrap());
        assert_eq!(config.allowed_origin, "https://denuncias.example.org");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[(HTTP_PORT_VAR, ""), (ALLOWED_ORIGIN_VAR, "  ")]).unwrap();
        assert_eq!(config.addr.port(), HTTP_PORT);
        assert_eq!(config.allowed_origin, ALLOWED_ORIGIN);
    }

    #[test]
    fn test_origin_normalization() {
        let test_cases = vec![
            ("http://localhost:3000/", "http://localhost:3000"),
            ("HTTP://Example.COM:80/form", "http://example.com"),
            ("https://example.com:8443", "https://example.com:8443"),
        ];

        for (raw, expected) in test_cases {
            assert_eq!(parse_origin(raw).unwrap(), expected, "Origin {} was not normalized", raw);
        }
    }

    #[test]
    fn test_invalid_values() {
        let invalid_cases = vec![
            (HTTP_PORT_VAR, "http"),
            (HTTP_PORT_VAR, "70000"),
            (BIND_ADDR_VAR, "localhost"),
            (ALLOWED_ORIGIN_VAR, "localhost:3000"),
            (ALLOWED_ORIGIN_VAR, "ftp://example.com"),
            (ALLOWED_ORIGIN_VAR, "not a url"),
        ];

        for (key, value) in invalid_cases {
            assert!(config_from(&[(key, value)]).is_err(), "{}={} was accepted", key, value);
        }
    }
}
