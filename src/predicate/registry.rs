// SPDX-License-Identifier: MIT

//! The closed set of predicates, addressable by name

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidatorError;
use crate::value::Value;

/// Signature of every predicate
pub type PredicateFn = fn(&Value) -> bool;

/// One of the six supported predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Predicate {
    #[serde(rename = "isString")]
    String,
    #[serde(rename = "isBool")]
    Bool,
    #[serde(rename = "isFunction")]
    Function,
    #[serde(rename = "isNumber")]
    Number,
    #[serde(rename = "isInteger")]
    Integer,
    #[serde(rename = "isFloat")]
    Float,
}

/// Accepted spellings, keyed lowercase
static NAMES: Lazy<HashMap<&'static str, Predicate>> = Lazy::new(|| {
    Predicate::ALL
        .into_iter()
        .flat_map(|predicate| predicate.spellings().iter().map(move |s| (*s, predicate)))
        .collect()
});

impl Predicate {
    pub const ALL: [Predicate; 6] = [
        Predicate::String,
        Predicate::Bool,
        Predicate::Function,
        Predicate::Number,
        Predicate::Integer,
        Predicate::Float,
    ];

    /// Canonical name, e.g. `isString`
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::String => "isString",
            Predicate::Bool => "isBool",
            Predicate::Function => "isFunction",
            Predicate::Number => "isNumber",
            Predicate::Integer => "isInteger",
            Predicate::Float => "isFloat",
        }
    }

    /// Lowercase forms accepted by `FromStr`: canonical, snake_case and bare tag
    fn spellings(&self) -> &'static [&'static str] {
        match self {
            Predicate::String => &["isstring", "is_string", "string"],
            Predicate::Bool => &[
                "isbool",
                "is_bool",
                "bool",
                "isboolean",
                "is_boolean",
                "boolean",
            ],
            Predicate::Function => &["isfunction", "is_function", "function"],
            Predicate::Number => &["isnumber", "is_number", "number"],
            Predicate::Integer => &["isinteger", "is_integer", "integer"],
            Predicate::Float => &["isfloat", "is_float", "float"],
        }
    }

    pub fn as_fn(&self) -> PredicateFn {
        match self {
            Predicate::String => super::is_string,
            Predicate::Bool => super::is_bool,
            Predicate::Function => super::is_function,
            Predicate::Number => super::is_number,
            Predicate::Integer => super::is_integer,
            Predicate::Float => super::is_float,
        }
    }

    /// Evaluate this predicate against `value`
    pub fn test(&self, value: &Value) -> bool {
        (self.as_fn())(value)
    }

    /// Resolve a predicate function by any accepted spelling
    pub fn lookup(name: &str) -> Option<PredicateFn> {
        name.parse::<Predicate>().ok().map(|p| p.as_fn())
    }
}

impl FromStr for Predicate {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let predicate = NAMES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ValidatorError::unknown_predicate(s))?;

        if s.trim() != predicate.name() {
            log::debug!("Resolved predicate alias '{}' to {}", s, predicate);
        }
        Ok(predicate)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
