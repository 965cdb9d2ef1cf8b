//! Metadata value types
//!
//! This module defines the tagged value type stored for every metadata tag.
//! A properties dictionary is a tree of these values: namespace keys map to
//! `Dict` sub-values, whose entries are the individual tags.

use std::collections::BTreeMap;
use std::fmt;

/// A metadata dictionary.
///
/// `BTreeMap` rather than `HashMap` so iteration order is deterministic,
/// which diff results and tests depend on.
pub type Dict = BTreeMap<String, MetaValue>;

/// Metadata tag value types
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    /// Integer value
    Integer(i64),
    /// Floating point value (resolutions, rationals flattened by the reader)
    Float(f64),
    /// Text value
    Text(String),
    /// Raw byte sequence (maker notes, ICC data)
    Bytes(Vec<u8>),
    /// Array of values
    Array(Vec<MetaValue>),
    /// Nested dictionary (namespace sub-blocks, structured maker tags)
    Dict(Dict),
}

impl MetaValue {
    /// Get the value as an integer, if it is an integer type
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetaValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float; integers coerce losslessly
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetaValue::Float(f) => Some(*f),
            MetaValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the value as a boolean.
    ///
    /// Properties readers encode flags as 0/1 integers, so those coerce.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Integer(0) => Some(false),
            MetaValue::Integer(1) => Some(true),
            _ => None,
        }
    }

    /// Get the value as a string, if it is a text type
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a byte slice, if it is a bytes type
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            MetaValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Get the value as an array, if it is an array type
    pub fn as_array(&self) -> Option<&[MetaValue]> {
        match self {
            MetaValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get the value as a dictionary, if it is a dictionary type
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            MetaValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consume the value and return the inner dictionary, if any
    pub fn into_dict(self) -> Option<Dict> {
        match self {
            MetaValue::Dict(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Integer(i) => write!(f, "{}", i),
            MetaValue::Float(v) => write!(f, "{}", v),
            MetaValue::Text(s) => write!(f, "{}", s),
            MetaValue::Bytes(b) => write!(f, "[{} bytes]", b.len()),
            MetaValue::Array(_) => write!(f, "[Array]"),
            MetaValue::Dict(_) => write!(f, "[Dict]"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for MetaValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            MetaValue::Integer(i) => serializer.serialize_i64(*i),
            MetaValue::Float(v) => serializer.serialize_f64(*v),
            MetaValue::Text(s) => serializer.serialize_str(s),
            MetaValue::Bytes(b) => serializer.serialize_bytes(b),
            MetaValue::Array(arr) => arr.serialize(serializer),
            MetaValue::Dict(dict) => dict.serialize(serializer),
        }
    }
}

impl From<i64> for MetaValue {
    fn from(i: i64) -> Self {
        MetaValue::Integer(i)
    }
}

impl From<u32> for MetaValue {
    fn from(i: u32) -> Self {
        MetaValue::Integer(i64::from(i))
    }
}

impl From<f64> for MetaValue {
    fn from(f: f64) -> Self {
        MetaValue::Float(f)
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::Text(s)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

impl From<Vec<u8>> for MetaValue {
    fn from(b: Vec<u8>) -> Self {
        MetaValue::Bytes(b)
    }
}

impl From<Dict> for MetaValue {
    fn from(d: Dict) -> Self {
        MetaValue::Dict(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_value_integer() {
        let value = MetaValue::Integer(42);
        assert_eq!(value.as_int(), Some(42));
        assert_eq!(value.as_f64(), Some(42.0));
        assert_eq!(value.to_string(), "42");
    }

    #[test]
    fn test_meta_value_text() {
        let value = MetaValue::Text("RGB".to_string());
        assert_eq!(value.as_str(), Some("RGB"));
        assert_eq!(value.as_int(), None);
        assert_eq!(value.to_string(), "RGB");
    }

    #[test]
    fn test_meta_value_bool_coercion() {
        assert_eq!(MetaValue::Integer(1).as_bool(), Some(true));
        assert_eq!(MetaValue::Integer(0).as_bool(), Some(false));
        assert_eq!(MetaValue::Integer(2).as_bool(), None);
        assert_eq!(MetaValue::Text("true".to_string()).as_bool(), None);
    }

    #[test]
    fn test_meta_value_from() {
        let value: MetaValue = 42i64.into();
        assert_eq!(value.as_int(), Some(42));

        let value: MetaValue = "test".into();
        assert_eq!(value.as_str(), Some("test"));

        let value: MetaValue = 72.0.into();
        assert_eq!(value.as_f64(), Some(72.0));
    }

    #[test]
    fn test_meta_value_dict() {
        let mut d = Dict::new();
        d.insert("Orientation".to_string(), MetaValue::Integer(1));
        let value = MetaValue::Dict(d);
        assert!(value.as_dict().is_some());
        assert_eq!(
            value.as_dict().unwrap().get("Orientation"),
            Some(&MetaValue::Integer(1))
        );
    }

    #[test]
    fn test_value_equality_is_exact() {
        assert_ne!(MetaValue::Integer(72), MetaValue::Float(72.0));
        assert_eq!(MetaValue::Float(72.0), MetaValue::Float(72.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_to_json() {
        let mut d = Dict::new();
        d.insert("Make".to_string(), MetaValue::Text("Canon".to_string()));
        d.insert("Orientation".to_string(), MetaValue::Integer(6));
        d.insert("XResolution".to_string(), MetaValue::Float(72.0));
        let value = MetaValue::Dict(d);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(
            json,
            r#"{"Make":"Canon","Orientation":6,"XResolution":72.0}"#
        );

        let nested = MetaValue::Array(vec![MetaValue::Integer(1), value]);
        let json = serde_json::to_string(&nested).unwrap();
        assert!(json.starts_with("[1,{"));
    }
}
