// SPDX-License-Identifier: MIT

//! Dynamic values
//!
//! This module provides:
//! - `Value` - a tagged variant standing in for "any runtime value"
//! - `ValueKind` - the runtime type tag of a value
//! - `Function` - a shareable callable stored inside a value

mod convert;
mod function;
mod kind;

pub use function::Function;
pub use kind::ValueKind;

use crate::error::Result;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// An untyped value as it arrives from deserialized input or host code
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    Bool(bool),
    Function(Function),
    /// IEEE-754 double, NaN and infinities included
    Number(f64),
    Null,
    /// Absence of a value
    Undefined,
    Object(BTreeMap<String, Value>),
    Array(Vec<Value>),
    Pattern(Regex),
}

impl Value {
    /// Build an anonymous callable value
    pub fn function<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Function::new(body))
    }

    /// Build a named callable value
    pub fn named_function<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Function::named(name, body))
    }

    /// Compile `source` into a pattern value
    pub fn pattern(source: &str) -> Result<Self> {
        Ok(Value::Pattern(Regex::new(source)?))
    }

    /// Empty object, `{}`
    pub fn object() -> Self {
        Value::Object(BTreeMap::new())
    }

    /// Empty array, `[]`
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Function(_) => ValueKind::Function,
            Value::Number(_) => ValueKind::Number,
            Value::Null => ValueKind::Null,
            Value::Undefined => ValueKind::Undefined,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::Pattern(_) => ValueKind::Pattern,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// The raw number, NaN included
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Undefined, Value::Undefined) => true,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", serde_json::Value::String(s.clone())),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Function(func) => write!(f, "{}", func),
            Value::Number(n) if n.is_nan() => f.write_str("NaN"),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", serde_json::Value::String(key.clone()), value)?;
                }
                f.write_str("}")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::function(|_| Value::Null).kind(), ValueKind::Function);
        assert_eq!(Value::from(f64::NAN).kind(), ValueKind::Number);
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Undefined.kind(), ValueKind::Undefined);
        assert_eq!(Value::object().kind(), ValueKind::Object);
        assert_eq!(Value::array().kind(), ValueKind::Array);
        assert_eq!(Value::pattern("^regex$").unwrap().kind(), ValueKind::Pattern);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::from(1).type_name(), "number");
        assert_eq!(Value::from(false).type_name(), "boolean");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Value::pattern("(unclosed").is_err());
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        let nan = Value::from(f64::NAN);
        assert_ne!(nan, nan.clone());
        assert_eq!(Value::from(1.5), Value::from(1.5));
    }

    #[test]
    fn test_pattern_equality_by_source() {
        assert_eq!(
            Value::pattern("a+").unwrap(),
            Value::pattern("a+").unwrap()
        );
        assert_ne!(Value::pattern("a+").unwrap(), Value::from("a+"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("say \"hi\"").to_string(), r#""say \"hi\"""#);
        assert_eq!(Value::from(-4875).to_string(), "-4875");
        assert_eq!(Value::from(1.1).to_string(), "1.1");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::pattern("^a$").unwrap().to_string(), "/^a$/");

        let nested = Value::from(serde_json::json!({"tags": ["a", 1, null]}));
        assert_eq!(nested.to_string(), r#"{"tags": ["a", 1, null]}"#);
    }
}
