//! Memory Client Module
//!
//! In-process `KvClient` that mirrors Redis semantics for the commands the
//! cache issues. Used by the test suites and for running without a server.

use std::collections::HashMap;

use crate::client::KvClient;
use crate::error::{CacheError, Result};

const WRONGTYPE: &str = "WRONGTYPE Operation against a key holding the wrong kind of value";

// == Slot ==
/// A stored value: either a plain string or a list of strings.
#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Str(Vec<u8>),
    List(Vec<Vec<u8>>),
}

// == Memory Client ==
#[derive(Debug, Default)]
pub struct MemoryClient {
    slots: HashMap<String, Slot>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys currently held.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Resolves Redis-style inclusive, possibly negative, bounds against `len`.
///
/// Returns `None` when the range selects nothing.
fn resolve_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if len == 0 || start > stop || start >= len {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}

impl KvClient for MemoryClient {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.slots.insert(key.to_string(), Slot::Str(value.to_vec()));
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.slots.get(key) {
            Some(Slot::Str(bytes)) => Ok(Some(bytes.clone())),
            Some(Slot::List(_)) => Err(CacheError::store("GET", WRONGTYPE)),
            None => Ok(None),
        }
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        let current = match self.slots.get(key) {
            Some(Slot::Str(bytes)) => std::str::from_utf8(bytes)
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| {
                    CacheError::store("INCR", "value is not an integer or out of range")
                })?,
            Some(Slot::List(_)) => return Err(CacheError::store("INCR", WRONGTYPE)),
            None => 0,
        };

        let next = current
            .checked_add(1)
            .ok_or_else(|| CacheError::store("INCR", "increment or decrement would overflow"))?;

        self.slots
            .insert(key.to_string(), Slot::Str(next.to_string().into_bytes()));
        Ok(next)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        let slot = self
            .slots
            .entry(key.to_string())
            .or_insert_with(|| Slot::List(Vec::new()));

        match slot {
            Slot::List(items) => {
                items.push(value.to_vec());
                Ok(items.len())
            }
            Slot::Str(_) => Err(CacheError::store("RPUSH", WRONGTYPE)),
        }
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        match self.slots.get(key) {
            Some(Slot::List(items)) => Ok(resolve_range(items.len(), start, stop)
                .map(|(from, to)| items[from..=to].to_vec())
                .unwrap_or_default()),
            Some(Slot::Str(_)) => Err(CacheError::store("LRANGE", WRONGTYPE)),
            None => Ok(Vec::new()),
        }
    }

    fn flushdb(&mut self) -> Result<()> {
        self.slots.clear();
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut client = MemoryClient::new();

        client.set("key1", b"value1").unwrap();
        assert_eq!(client.get("key1").unwrap(), Some(b"value1".to_vec()));
        assert_eq!(client.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_list() {
        let mut client = MemoryClient::new();

        client.rpush("key1", b"a").unwrap();
        client.set("key1", b"b").unwrap();
        assert_eq!(client.get("key1").unwrap(), Some(b"b".to_vec()));
    }

    #[test]
    fn test_incr_from_missing_and_existing() {
        let mut client = MemoryClient::new();

        assert_eq!(client.incr("counter").unwrap(), 1);
        assert_eq!(client.incr("counter").unwrap(), 2);

        client.set("preset", b"41").unwrap();
        assert_eq!(client.incr("preset").unwrap(), 42);
        assert_eq!(client.get("preset").unwrap(), Some(b"42".to_vec()));
    }

    #[test]
    fn test_incr_non_integer_fails() {
        let mut client = MemoryClient::new();

        client.set("text", b"foo").unwrap();
        assert!(matches!(client.incr("text"), Err(CacheError::Store(_))));
    }

    #[test]
    fn test_incr_overflow_fails() {
        let mut client = MemoryClient::new();

        client.set("big", i64::MAX.to_string().as_bytes()).unwrap();
        assert!(matches!(client.incr("big"), Err(CacheError::Store(_))));
    }

    #[test]
    fn test_rpush_returns_length() {
        let mut client = MemoryClient::new();

        assert_eq!(client.rpush("list", b"a").unwrap(), 1);
        assert_eq!(client.rpush("list", b"b").unwrap(), 2);
    }

    #[test]
    fn test_wrong_type_errors() {
        let mut client = MemoryClient::new();

        client.set("text", b"foo").unwrap();
        client.rpush("list", b"a").unwrap();

        assert!(matches!(client.rpush("text", b"a"), Err(CacheError::Store(_))));
        assert!(matches!(client.lrange("text", 0, -1), Err(CacheError::Store(_))));
        assert!(matches!(client.get("list"), Err(CacheError::Store(_))));
    }

    #[test]
    fn test_lrange_bounds() {
        let mut client = MemoryClient::new();
        for item in [b"a", b"b", b"c", b"d"] {
            client.rpush("list", item).unwrap();
        }

        let all = client.lrange("list", 0, -1).unwrap();
        assert_eq!(all.len(), 4);

        let middle = client.lrange("list", 1, 2).unwrap();
        assert_eq!(middle, vec![b"b".to_vec(), b"c".to_vec()]);

        let tail = client.lrange("list", -2, -1).unwrap();
        assert_eq!(tail, vec![b"c".to_vec(), b"d".to_vec()]);

        // Out-of-range stop is clamped, inverted range is empty
        assert_eq!(client.lrange("list", 2, 100).unwrap().len(), 2);
        assert!(client.lrange("list", 3, 1).unwrap().is_empty());
        assert!(client.lrange("list", 10, 20).unwrap().is_empty());
        assert!(client.lrange("missing", 0, -1).unwrap().is_empty());
    }

    #[test]
    fn test_flushdb_clears_everything() {
        let mut client = MemoryClient::new();

        client.set("a", b"1").unwrap();
        client.rpush("b", b"2").unwrap();
        assert_eq!(client.len(), 2);

        client.flushdb().unwrap();
        assert!(client.is_empty());
    }
}
