// SPDX-License-Identifier: MIT

//! Runtime type predicates
//!
//! Six pure, total checks over a [`Value`]:
//! - `is_string`, `is_bool`, `is_function` - single tag comparisons
//! - `is_number` - any number except NaN, infinities included
//! - `is_integer` - finite number with no fractional part
//! - `is_float` - finite number with a fractional part
//!
//! Numbers split three ways: finite integers, finite floats, and infinities,
//! which are numbers but neither integers nor floats.

mod classify;
mod registry;

pub use classify::{classify, Classification};
pub use registry::{Predicate, PredicateFn};

use crate::value::Value;

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub fn is_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

pub fn is_number(value: &Value) -> bool {
    number(value).is_some()
}

pub fn is_integer(value: &Value) -> bool {
    number(value).is_some_and(|n| n.is_finite() && n % 1.0 == 0.0)
}

pub fn is_float(value: &Value) -> bool {
    number(value).is_some_and(|n| !n.abs().is_infinite()) && !is_integer(value)
}

/// The numeric payload, with NaN treated as "not a number"
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) if !n.is_nan() => Some(*n),
        _ => None,
    }
}
