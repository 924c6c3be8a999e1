// SPDX-License-Identifier: MIT

//! Evaluate every predicate against a single value

use serde::Serialize;

use super::Predicate;
use crate::value::{Value, ValueKind};

/// Outcome of all six predicates for one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub kind: ValueKind,
    pub is_string: bool,
    pub is_bool: bool,
    pub is_function: bool,
    pub is_number: bool,
    pub is_integer: bool,
    pub is_float: bool,
}

impl Classification {
    pub fn holds(&self, predicate: Predicate) -> bool {
        match predicate {
            Predicate::String => self.is_string,
            Predicate::Bool => self.is_bool,
            Predicate::Function => self.is_function,
            Predicate::Number => self.is_number,
            Predicate::Integer => self.is_integer,
            Predicate::Float => self.is_float,
        }
    }

    /// Predicates that hold, in declaration order
    pub fn matching(&self) -> Vec<Predicate> {
        Predicate::ALL
            .into_iter()
            .filter(|p| self.holds(*p))
            .collect()
    }
}

pub fn classify(value: &Value) -> Classification {
    Classification {
        kind: value.kind(),
        is_string: Predicate::String.test(value),
        is_bool: Predicate::Bool.test(value),
        is_function: Predicate::Function.test(value),
        is_number: Predicate::Number.test(value),
        is_integer: Predicate::Integer.test(value),
        is_float: Predicate::Float.test(value),
    }
}
