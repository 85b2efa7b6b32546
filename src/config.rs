//! Configuration Module
//!
//! Handles loading the store connection settings from environment variables.

use std::env;
use std::time::Duration;

/// Store connection parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hostname of the Redis server
    pub host: String,
    /// TCP port of the Redis server
    pub port: u16,
    /// Logical database index; this is the namespace wiped on initialization
    pub db: i64,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_HOST` - Server hostname (default: 127.0.0.1)
    /// - `REDIS_PORT` - Server port (default: 6379)
    /// - `REDIS_DB` - Database index (default: 0)
    /// - `REDIS_CONNECT_TIMEOUT` - Connect timeout in seconds, at least 1 (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("REDIS_HOST")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.host),
            port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            db: env::var("REDIS_DB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.db),
            connect_timeout: env::var("REDIS_CONNECT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs: &u64| secs > 0)
                .unwrap_or(defaults.connect_timeout),
        }
    }

    /// Renders the connection URL, e.g. `redis://127.0.0.1:6379/0`.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }

    /// Returns the connect timeout as a `Duration`.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            db: 0,
            connect_timeout: 5,
        }
    }
}
