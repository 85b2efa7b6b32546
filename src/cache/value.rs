//! Cache Value Module
//!
//! Defines the scalar values the cache accepts, their canonical byte
//! encoding, and the decoders used on the read path.

use serde::{Serialize, Serializer};

use crate::error::{CacheError, Result};

// == Value ==
/// A scalar value that can be written to the store.
///
/// Serializes untagged, so history entries read as plain JSON scalars
/// (`"foo"`, `42`, `1.5`) with byte blobs as arrays of numbers. Non-finite
/// floats, which JSON cannot hold, are written as their canonical strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
    Integer(i64),
    Float(#[serde(serialize_with = "serialize_float")] f64),
}

fn serialize_float<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format!("{:?}", value))
    }
}

impl Value {
    // == Canonical Encoding ==
    /// Returns the bytes written to the store for this value.
    ///
    /// Text is UTF-8, bytes are passed through, integers are base-10 and
    /// floats use the shortest round-trip form, keeping `.0` on integral values.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Text(s) => s.as_bytes().to_vec(),
            Value::Bytes(b) => b.clone(),
            Value::Integer(n) => n.to_string().into_bytes(),
            Value::Float(f) => format!("{:?}", f).into_bytes(),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

// == Decoders ==
/// Decodes stored bytes as UTF-8 text.
pub fn decode_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| CacheError::Decode(format!("invalid UTF-8: {}", e)))
}

/// Decodes stored bytes as a base-10 integer.
pub fn decode_integer(bytes: Vec<u8>) -> Result<i64> {
    let text = decode_text(bytes)?;
    text.parse::<i64>()
        .map_err(|e| CacheError::Decode(format!("invalid integer {:?}: {}", text, e)))
}

/// Decodes stored bytes as a floating point number.
pub fn decode_float(bytes: Vec<u8>) -> Result<f64> {
    let text = decode_text(bytes)?;
    text.parse::<f64>()
        .map_err(|e| CacheError::Decode(format!("invalid float {:?}: {}", text, e)))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_encoding() {
        assert_eq!(Value::from("foo").to_bytes(), b"foo");
        assert_eq!(Value::from(vec![0u8, 255]).to_bytes(), vec![0u8, 255]);
        assert_eq!(Value::from(-42i64).to_bytes(), b"-42");
        assert_eq!(Value::from(2.75f64).to_bytes(), b"2.75");
        assert_eq!(Value::from(1.0f64).to_bytes(), b"1.0");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(7i32), Value::Integer(7));
        assert_eq!(Value::from(String::from("a")), Value::Text("a".to_string()));
        assert_eq!(Value::from(&b"ab"[..]), Value::Bytes(b"ab".to_vec()));
    }

    #[test]
    fn test_serialize_untagged() {
        let args = (Value::from("foo"),);
        assert_eq!(serde_json::to_string(&args).unwrap(), r#"["foo"]"#);

        let args = (Value::from(5i64),);
        assert_eq!(serde_json::to_string(&args).unwrap(), "[5]");
    }

    #[test]
    fn test_serialize_non_finite_floats() {
        let encode = |f: f64| serde_json::to_string(&(Value::from(f),)).unwrap();

        assert_eq!(encode(1.5), "[1.5]");
        assert_eq!(encode(f64::NAN), r#"["NaN"]"#);
        assert_eq!(encode(f64::INFINITY), r#"["inf"]"#);
        assert_eq!(encode(f64::NEG_INFINITY), r#"["-inf"]"#);
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text(b"hello".to_vec()).unwrap(), "hello");
        assert!(matches!(
            decode_text(vec![0xff, 0xfe]),
            Err(CacheError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_integer() {
        assert_eq!(decode_integer(b"123".to_vec()).unwrap(), 123);
        assert_eq!(decode_integer(b"-7".to_vec()).unwrap(), -7);
        assert!(matches!(
            decode_integer(b"foo".to_vec()),
            Err(CacheError::Decode(_))
        ));
        assert!(matches!(
            decode_integer(b"1.5".to_vec()),
            Err(CacheError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_float() {
        assert_eq!(decode_float(b"2.5".to_vec()).unwrap(), 2.5);
        assert_eq!(decode_float(b"10".to_vec()).unwrap(), 10.0);
        assert!(matches!(
            decode_float(b"abc".to_vec()),
            Err(CacheError::Decode(_))
        ));
    }
}
