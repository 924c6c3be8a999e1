// SPDX-License-Identifier: MIT

//! Runtime type tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// The runtime type tag carried by every [`Value`](super::Value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Boolean,
    Function,
    Number,
    Null,
    Undefined,
    Object,
    Array,
    Pattern,
}

impl ValueKind {
    /// Lowercase tag name, e.g. `"boolean"`
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Function => "function",
            ValueKind::Number => "number",
            ValueKind::Null => "null",
            ValueKind::Undefined => "undefined",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::Pattern => "pattern",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
