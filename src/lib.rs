//! Instrumented Cache - a Redis-backed cache facade
//!
//! Stores scalar values under random keys, reads them back with optional
//! decoding, and records call counts and call histories in the store.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;

pub use cache::{Cache, CallHistory, CallReport, Value, STORE_METHOD};
pub use client::{KvClient, MemoryClient, RedisClient};
pub use config::Config;
pub use error::{CacheError, Result};
