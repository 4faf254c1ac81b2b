//! Request parameter encoding.
//!
//! Turns the named arguments of an operation into a URL query string or a
//! JSON body. Argument names are written in snake_case on the Rust side and
//! translated to the kebab-case names the exchange expects on the wire.
//!
//! # Example
//!
//! ```rust
//! use matchbook_sdk::params::RequestParams;
//!
//! let params = RequestParams::new()
//!     .with("per_page", 20)
//!     .with("include_prices", true)
//!     .with_opt("after", None::<i64>);
//!
//! assert_eq!(params.encode(), "per-page=20&include-prices=true");
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// Characters escaped in query keys and values. Everything except the
/// RFC 3986 unreserved set.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Converts a snake_case argument name to its kebab-case wire name.
#[must_use]
pub fn wire_name(name: &str) -> String {
    name.replace('_', "-")
}

/// A single typed parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Free-form text.
    Str(String),
    /// Integer value, written in decimal.
    Int(i64),
    /// Boolean, written as `true` / `false`.
    Bool(bool),
    /// A fixed token from one of the exchange's enumerations.
    Enum(&'static str),
}

impl ParamValue {
    /// Converts the value to its JSON body representation.
    ///
    /// Booleans and integers keep their JSON types; text and enum tokens
    /// become JSON strings.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Str(s) => Value::String(s.clone()),
            Self::Int(n) => Value::from(*n),
            Self::Bool(b) => Value::Bool(*b),
            Self::Enum(token) => Value::String((*token).to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Enum(token) => f.write_str(token),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        Self::Str(value.normalize().to_string())
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Str(value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

/// Comma-joins a list of ids, the form the exchange uses for multi-valued
/// filters such as `ids` or `sport-ids`.
impl From<&[i64]> for ParamValue {
    fn from(values: &[i64]) -> Self {
        let joined = values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Self::Str(joined)
    }
}

/// Ordered set of named request parameters.
///
/// Keys are stored in wire form. Insertion order is preserved so the encoded
/// output is deterministic. Values for omitted arguments are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    entries: Vec<(String, ParamValue)>,
}

impl RequestParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter and returns the set.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a parameter only when a value was supplied.
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(name, value);
        }
        self
    }

    /// Inserts a parameter. An existing parameter with the same wire name
    /// keeps its position and has its value replaced.
    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        let key = wire_name(name);
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored under `name` (snake_case or wire form).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = wire_name(name);
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(wire name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encodes the parameters as `key1=value1&key2=value2`.
    ///
    /// Keys and values are percent-encoded. An empty set encodes to an empty
    /// string.
    #[must_use]
    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, QUERY_COMPONENT),
                    utf8_percent_encode(&value.to_string(), QUERY_COMPONENT)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Appends the encoded query to `path`, adding `?` only when there is
    /// something to append.
    #[must_use]
    pub fn append_to(&self, path: &str) -> String {
        if self.entries.is_empty() {
            return path.to_string();
        }
        format!("{}?{}", path, self.encode())
    }

    /// Builds a JSON object body from the parameters.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}
