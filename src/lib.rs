// SPDX-License-Identifier: MIT

//! Runtime type predicates for untyped values.
//!
//! Values that arrive without a static type (decoded documents, host
//! callbacks) are modeled as a [`Value`] and classified with a fixed set of
//! pure predicates.

pub mod error;
pub mod input;
pub mod predicate;
pub mod value;

pub use error::{Result, ValidatorError};
pub use predicate::{
    classify, is_bool, is_float, is_function, is_integer, is_number, is_string, Classification,
    Predicate,
};
pub use value::{Function, Value, ValueKind};
