//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

// == Defaults ==
pub const DEFAULT_CAPACITY: usize = 1000;
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Unparseable values fall back to the default. A capacity of 0 parses
    /// fine here and is rejected when the cache is built.
    pub fn from_env() -> Self {
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(DEFAULT_CAPACITY),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.server_port, 3000);
    }

    // Both env cases live in one test so parallel tests don't race on the
    // process environment.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);

        env::set_var("CACHE_CAPACITY", " 42 ");
        env::set_var("SERVER_PORT", "not-a-port");

        let config = Config::from_env();
        assert_eq!(config.capacity, 42);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);

        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
    }
}
