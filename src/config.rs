//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

/// Default freshness window for cached movies, in seconds
pub const DEFAULT_TTL: u64 = 60;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5001;

/// Service configuration parameters.
///
/// All values are read once at start-up; nothing is reloaded at runtime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds a cached movie stays fresh
    pub ttl_seconds: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Optional JSON file used to seed the movie catalog
    pub movies_seed: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TTL` - Cache TTL in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 5001)
    /// - `MOVIES_SEED` - Path to a JSON array of movies (default: unset)
    pub fn from_env() -> Self {
        Self {
            ttl_seconds: parse_or_default("TTL", env::var("TTL").ok(), DEFAULT_TTL),
            server_port: parse_or_default(
                "SERVER_PORT",
                env::var("SERVER_PORT").ok(),
                DEFAULT_PORT,
            ),
            movies_seed: env::var("MOVIES_SEED")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Parses an optional setting, warning when a value is present but unusable.
fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(
                "Ignoring invalid {}={:?}, using default {}",
                key, value, default
            );
            default
        }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL,
            server_port: DEFAULT_PORT,
            movies_seed: None,
        }
    }
}
