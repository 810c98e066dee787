//! Tagged runtime values.
//!
//! A configuration value is either a mapping, plain text, an integer, or a list.
//! Each operation is only defined for some tags; applying it to the wrong tag
//! yields a [`Fault`] rather than a panic.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::Fault;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Signed integer
    Int(i64),
    /// Plain text
    Text(String),
    /// Ordered sequence
    List(Vec<Value>),
    /// Mapping from text keys to values, iterated in key order
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Builds a mapping from `(key, value)` pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Builds a list from anything convertible into values.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Name of the value's tag as it appears in fault messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Keyed lookup; only mappings support it.
    pub fn get(&self, key: &str) -> Result<&Value, Fault> {
        match self {
            Value::Map(entries) => {
                entries.get(key).ok_or_else(|| Fault::MissingKey { key: key.to_string() })
            }
            other => Err(Fault::WrongType { type_name: other.type_name(), key: key.to_string() }),
        }
    }

    /// Positional lookup; only lists support it.
    pub fn index(&self, index: usize) -> Result<&Value, Fault> {
        match self {
            Value::List(items) => {
                items.get(index).ok_or(Fault::OutOfRange { index, len: items.len() })
            }
            other => {
                Err(Fault::WrongCapability { type_name: other.type_name(), operation: "index" })
            }
        }
    }

    /// Upper-cases text.
    pub fn upper(&self) -> Result<Value, Fault> {
        match self {
            Value::Text(s) => Ok(Value::Text(s.to_uppercase())),
            other => {
                Err(Fault::WrongCapability { type_name: other.type_name(), operation: "upper" })
            }
        }
    }

    /// Concatenates two text values.
    pub fn concat(&self, rhs: &Value) -> Result<Value, Fault> {
        match (self, rhs) {
            (Value::Text(a), Value::Text(b)) => Ok(Value::Text(format!("{a}{b}"))),
            (Value::Text(_), other) | (other, _) => {
                Err(Fault::WrongCapability { type_name: other.type_name(), operation: "concat" })
            }
        }
    }

    /// Checked integer division. A zero divisor or an overflowing quotient is
    /// an arithmetic fault.
    pub fn div(&self, rhs: &Value) -> Result<Value, Fault> {
        match (self, rhs) {
            (Value::Int(n), Value::Int(d)) => n
                .checked_div(*d)
                .map(Value::Int)
                .ok_or(Fault::Arithmetic { numerator: *n, denominator: *d }),
            (Value::Int(_), other) | (other, _) => {
                Err(Fault::WrongCapability { type_name: other.type_name(), operation: "div" })
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
