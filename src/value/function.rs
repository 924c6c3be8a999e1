// SPDX-License-Identifier: MIT

//! Callable values

use super::Value;
use std::fmt;
use std::sync::Arc;

/// Signature shared by every callable stored in a [`Value`]
type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable entity: a closure, function pointer or bound method
#[derive(Clone)]
pub struct Function {
    name: Option<String>,
    body: Arc<NativeFn>,
}

impl Function {
    /// Wrap an anonymous callable
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            body: Arc::new(body),
        }
    }

    /// Wrap a callable under a name
    pub fn named<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the callable
    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }

    /// Whether both handles point at the same callable
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "[function {}]", name),
            None => write!(f, "[function]"),
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
