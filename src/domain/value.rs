//! Typed parameter values.

use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

/// A coerced spreadsheet value.
///
/// Empty cells are represented as `Text(String::new())`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    /// Integer literal too large for `i64`.
    BigInt(Number),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn empty() -> Self {
        ParamValue::Text(String::new())
    }

    pub fn is_empty_text(&self) -> bool {
        matches!(self, ParamValue::Text(s) if s.is_empty())
    }

    /// Short type label used in log lines.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "bool",
            ParamValue::Int(_) | ParamValue::BigInt(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Text(_) => "str",
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ParamValue::Bool(b) => Value::Bool(*b),
            ParamValue::Int(i) => Value::from(*i),
            ParamValue::BigInt(n) => Value::Number(n.clone()),
            ParamValue::Float(f) => Value::from(*f),
            ParamValue::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::BigInt(n) => write!(f, "{n}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}
