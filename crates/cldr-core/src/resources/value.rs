use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// A decoded resource tree.
///
/// Structured and binary resources decode into this type; raw resources are
/// wrapped as [`ResourceValue::Bytes`]. Rich variants (`Symbol`, `Range`,
/// `Regex`, `Timestamp`) are the only non-plain types a resource may carry.
///
/// # Example
///
/// ```
/// use cldr_core::ResourceValue;
///
/// let value = ResourceValue::mapping([
///     ("numbers", ResourceValue::mapping([("group", ResourceValue::from(","))])),
/// ]);
/// assert_eq!(value.lookup(&["numbers", "group"]).and_then(ResourceValue::as_str), Some(","));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResourceValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Unmodified payload of a raw resource.
    Bytes(Vec<u8>),
    /// An atomic symbol, distinct from a plain string.
    Symbol(String),
    Range(RangeValue),
    Regex(Pattern),
    Timestamp(DateTime<FixedOffset>),
    Sequence(Vec<ResourceValue>),
    Mapping(BTreeMap<String, ResourceValue>),
}

impl ResourceValue {
    /// Build a mapping from key-value pairs.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ResourceValue)>,
    {
        ResourceValue::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a sequence from values.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ResourceValue>,
    {
        ResourceValue::Sequence(items.into_iter().collect())
    }

    /// Get a child of a mapping by key.
    pub fn get(&self, key: &str) -> Option<&ResourceValue> {
        match self {
            ResourceValue::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Walk nested mappings along `keys`.
    pub fn lookup(&self, keys: &[&str]) -> Option<&ResourceValue> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Get this value as text. Strings and symbols both qualify.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResourceValue::String(s) | ResourceValue::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ResourceValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ResourceValue::Float(f) => Some(*f),
            ResourceValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ResourceValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ResourceValue::Bytes(b) => Some(b),
            ResourceValue::String(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ResourceValue]> {
        match self {
            ResourceValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, ResourceValue>> {
        match self {
            ResourceValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, ResourceValue::Mapping(_))
    }
}

/// An integer range, `start..end` or `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeValue {
    pub start: i64,
    pub end: i64,
    /// True when `end` is excluded.
    pub exclusive: bool,
}

impl RangeValue {
    pub fn contains(&self, n: i64) -> bool {
        if self.exclusive {
            self.start <= n && n < self.end
        } else {
            self.start <= n && n <= self.end
        }
    }
}

/// A compiled regular expression that compares by its source pattern.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(de::Error::custom)
    }
}

// From implementations for common types

impl From<bool> for ResourceValue {
    fn from(b: bool) -> Self {
        ResourceValue::Bool(b)
    }
}

impl From<i32> for ResourceValue {
    fn from(n: i32) -> Self {
        ResourceValue::Integer(i64::from(n))
    }
}

impl From<i64> for ResourceValue {
    fn from(n: i64) -> Self {
        ResourceValue::Integer(n)
    }
}

impl From<f64> for ResourceValue {
    fn from(n: f64) -> Self {
        ResourceValue::Float(n)
    }
}

impl From<&str> for ResourceValue {
    fn from(s: &str) -> Self {
        ResourceValue::String(s.to_string())
    }
}

impl From<String> for ResourceValue {
    fn from(s: String) -> Self {
        ResourceValue::String(s)
    }
}

impl From<Vec<ResourceValue>> for ResourceValue {
    fn from(items: Vec<ResourceValue>) -> Self {
        ResourceValue::Sequence(items)
    }
}
