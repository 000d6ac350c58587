//! Server configuration.
//!
//! Everything comes from environment variables with local-development
//! defaults, so `cargo run` works against a search service on localhost.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::upstream::DEFAULT_ENDPOINT;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default static asset directory (relative to the working directory).
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a socket address")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Where search requests go.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamSource {
    /// The real route-search service at this URL
    Http(String),
    /// A canned JSON response on disk
    Mock(PathBuf),
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on (`ROUTE_SERVER_ADDR`)
    pub bind_addr: SocketAddr,

    /// Search transport (`ROUTE_SEARCH_URL`, or `ROUTE_MOCK_DATA` to use a mock)
    pub upstream: UpstreamSource,

    /// Static asset directory (`ROUTE_STATIC_DIR`)
    pub static_dir: String,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a lookup function.
    ///
    /// `ROUTE_MOCK_DATA` takes precedence over `ROUTE_SEARCH_URL`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("ROUTE_SERVER_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: "ROUTE_SERVER_ADDR",
                value: addr.clone(),
            })?;

        let upstream = match lookup("ROUTE_MOCK_DATA") {
            Some(path) => UpstreamSource::Mock(PathBuf::from(non_empty("ROUTE_MOCK_DATA", path)?)),
            None => UpstreamSource::Http(match lookup("ROUTE_SEARCH_URL") {
                Some(url) => non_empty("ROUTE_SEARCH_URL", url)?,
                None => DEFAULT_ENDPOINT.to_string(),
            }),
        };

        let static_dir = match lookup("ROUTE_STATIC_DIR") {
            Some(dir) => non_empty("ROUTE_STATIC_DIR", dir)?,
            None => DEFAULT_STATIC_DIR.to_string(),
        };

        Ok(Self {
            bind_addr,
            upstream,
            static_dir,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            upstream: UpstreamSource::Http(DEFAULT_ENDPOINT.to_string()),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_string())
}
