//! Cache Facade Module
//!
//! `Cache` stores scalar values under random keys and reads them back with
//! optional decoding. Writes are counted and logged in the store itself.

use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::instrument::{call_history, count_calls, inputs_key, outputs_key};
use crate::cache::value::{decode_float, decode_integer, decode_text, Value};
use crate::cache::{CallHistory, CallReport};
use crate::client::{KvClient, RedisClient};
use crate::config::Config;
use crate::error::Result;

/// Qualified name `store` is counted and logged under.
pub const STORE_METHOD: &str = "Cache::store";

// == Cache ==
/// Facade over a key-value store connection.
///
/// Owns a single connection handle; every method is a blocking round trip.
#[derive(Debug)]
pub struct Cache<C: KvClient = RedisClient> {
    client: C,
}

impl Cache<RedisClient> {
    /// Connects to the Redis server described by `config` and flushes its database.
    pub fn connect(config: &Config) -> Result<Self> {
        Self::new(RedisClient::connect(config)?)
    }
}

impl<C: KvClient> Cache<C> {
    // == Constructor ==
    /// Wraps an open connection, clearing every key in its database.
    pub fn new(mut client: C) -> Result<Self> {
        client.flushdb()?;
        info!("Cache initialized, database flushed");
        Ok(Self { client })
    }

    // == Store ==
    /// Writes `value` under a fresh random key and returns the key.
    ///
    /// Increments the `Cache::store` counter and appends to its history logs.
    /// A failure after the write is not rolled back.
    pub fn store(&mut self, value: impl Into<Value>) -> Result<String> {
        let value = value.into();
        count_calls(&mut self.client, STORE_METHOD, |client| {
            call_history(client, STORE_METHOD, &(&value,), |client| {
                let key = Uuid::new_v4().to_string();
                client.set(&key, &value.to_bytes())?;
                debug!("Stored value under {}", key);
                Ok(key)
            })
        })
    }

    // == Get ==
    /// Reads the raw bytes stored under `key`, `None` if the key is absent.
    pub fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        self.client.get(key)
    }

    /// Reads `key` and applies `decoder` to the bytes when present.
    ///
    /// Decoder errors are returned unchanged.
    pub fn get_with<T, F>(&mut self, key: &str, decoder: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> Result<T>,
    {
        self.get(key)?.map(decoder).transpose()
    }

    /// Reads `key` as UTF-8 text.
    pub fn get_text(&mut self, key: &str) -> Result<Option<String>> {
        self.get_with(key, decode_text)
    }

    /// Reads `key` as a base-10 integer.
    pub fn get_integer(&mut self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, decode_integer)
    }

    /// Reads `key` as a floating point number.
    pub fn get_float(&mut self, key: &str) -> Result<Option<f64>> {
        self.get_with(key, decode_float)
    }

    // == Instrumentation Readers ==
    /// Returns how many times `method` has been called, 0 if never.
    pub fn call_count(&mut self, method: &str) -> Result<i64> {
        Ok(self.get_integer(method)?.unwrap_or(0))
    }

    /// Returns the recorded input and output logs of `method`.
    pub fn history(&mut self, method: &str) -> Result<CallHistory> {
        let inputs = self.client.lrange(&inputs_key(method), 0, -1)?;
        let outputs = self.client.lrange(&outputs_key(method), 0, -1)?;

        let to_strings = |items: Vec<Vec<u8>>| -> Vec<String> {
            items
                .into_iter()
                .map(|item| String::from_utf8_lossy(&item).into_owned())
                .collect()
        };

        Ok(CallHistory {
            inputs: to_strings(inputs),
            outputs: to_strings(outputs),
        })
    }

    /// Collects the call count and history of `method` into a report.
    pub fn replay(&mut self, method: &str) -> Result<CallReport> {
        Ok(CallReport {
            method: method.to_string(),
            count: self.call_count(method)?,
            history: self.history(method)?,
        })
    }

    // == Lifecycle ==
    /// Returns a reference to the underlying connection.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Releases the cache, handing back the connection.
    pub fn into_inner(self) -> C {
        self.client
    }

    /// Closes the connection.
    pub fn close(self) {
        drop(self.client);
        info!("Cache connection closed");
    }
}
