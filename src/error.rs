// SPDX-License-Identifier: MIT

//! Typed error handling for validator-rs
//!
//! The predicates themselves are total and never produce an error. Everything
//! in here belongs to the edges of the crate: resolving predicate names,
//! compiling patterns and decoding input documents.

use thiserror::Error;

/// Top-level error type for validator-rs
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Predicate name that is not part of the fixed set
    #[error("Unknown predicate '{name}'")]
    UnknownPredicate { name: String },

    /// Regular expression failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Input format that cannot be decoded
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON decoding errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML decoding errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ValidatorError {
    /// Create an unknown predicate error
    pub fn unknown_predicate(name: impl Into<String>) -> Self {
        Self::UnknownPredicate { name: name.into() }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
