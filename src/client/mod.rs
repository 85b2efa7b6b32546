//! Store Client Module
//!
//! The connection seam between the cache facade and the external key-value store.
//!
//! # Implementations
//! - `RedisClient` - a blocking connection to a Redis server
//! - `MemoryClient` - an in-process store with the same command semantics

mod memory;
mod redis_client;

pub use self::memory::MemoryClient;
pub use self::redis_client::RedisClient;

use crate::error::Result;

// == KvClient Trait ==
/// The subset of store commands the cache relies on.
///
/// Every method is a single blocking round trip. Implementations report
/// command failures as `CacheError::Store`.
pub trait KvClient {
    /// `SET key value`
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// `GET key`, `None` when the key does not exist.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// `INCR key`, returning the value after the increment.
    fn incr(&mut self, key: &str) -> Result<i64>;

    /// `RPUSH key value`, returning the list length after the push.
    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize>;

    /// `LRANGE key start stop` with inclusive, possibly negative, bounds.
    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>>;

    /// `FLUSHDB`, removing every key in the selected database.
    fn flushdb(&mut self) -> Result<()>;
}
