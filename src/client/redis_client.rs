//! Redis Client Module
//!
//! Blocking `KvClient` implementation over a single Redis connection.

use redis::{Cmd, Connection, FromRedisValue};
use tracing::{info, warn};

use crate::client::KvClient;
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Redis Client ==
/// A single, unpooled connection to a Redis server.
pub struct RedisClient {
    conn: Connection,
    url: String,
}

impl RedisClient {
    // == Constructor ==
    /// Opens a connection using the given configuration and verifies it with `PING`.
    ///
    /// # Errors
    /// - `CacheError::Config` if the URL cannot be parsed or the timeout is zero
    /// - `CacheError::Connection` if the server is unreachable or does not answer
    pub fn connect(config: &Config) -> Result<Self> {
        let url = config.url();
        if config.connect_timeout == 0 {
            return Err(CacheError::Config(
                "connect timeout must be at least one second".to_string(),
            ));
        }
        info!("Connecting to redis at {}", url);

        let client = redis::Client::open(url.as_str())
            .map_err(|e| CacheError::Config(format!("invalid redis url {}: {}", url, e)))?;

        let mut conn = client
            .get_connection_with_timeout(config.connect_timeout())
            .map_err(|e| {
                CacheError::Connection(format!("failed to connect to redis at {}: {}", url, e))
            })?;

        let pong: String = redis::cmd("PING")
            .query(&mut conn)
            .map_err(|e| CacheError::Connection(format!("redis ping failed: {}", e)))?;

        if pong != "PONG" {
            return Err(CacheError::Connection(format!(
                "redis ping returned {:?} instead of PONG",
                pong
            )));
        }

        info!("Redis connection established");
        Ok(Self { conn, url })
    }

    /// Returns the URL this client is connected to.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn query<T: FromRedisValue>(&mut self, command: &str, cmd: &Cmd) -> Result<T> {
        cmd.query(&mut self.conn).map_err(|e| {
            warn!("Redis {} failed: {}", command, e);
            CacheError::store(command, e)
        })
    }
}

impl KvClient for RedisClient {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.query("SET", redis::cmd("SET").arg(key).arg(value))
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        self.query("GET", redis::cmd("GET").arg(key))
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        self.query("INCR", redis::cmd("INCR").arg(key))
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        self.query("RPUSH", redis::cmd("RPUSH").arg(key).arg(value))
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        self.query("LRANGE", redis::cmd("LRANGE").arg(key).arg(start).arg(stop))
    }

    fn flushdb(&mut self) -> Result<()> {
        self.query("FLUSHDB", &redis::cmd("FLUSHDB"))
    }
}

impl std::fmt::Debug for RedisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisClient").field("url", &self.url).finish()
    }
}
