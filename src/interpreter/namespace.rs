use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Variable bindings for one interpreter session.
///
/// A single flat mapping from identifier to value. It lives as long as the
/// session and is changed only by assignments and by argument binding during
/// function calls. There is no internal locking; concurrent sessions each own
/// their own namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    bindings: HashMap<String, Value>,
}

impl Namespace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `name`, yielding `nil` when it is unbound.
    ///
    /// # Example
    /// ```
    /// use gander::{Namespace, Value};
    ///
    /// let mut namespace = Namespace::new();
    /// assert_eq!(namespace.get("y"), Value::Nil);
    ///
    /// namespace.set("y", Value::Integer(2));
    /// assert_eq!(namespace.get("y"), Value::Integer(2));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        self.bindings.get(name).copied().unwrap_or_default()
    }

    /// Returns the binding for `name`, distinguishing unbound names from
    /// names bound to `nil`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).copied()
    }

    /// Binds `name` to `value`, returning the previous binding if any.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    /// Removes the binding for `name`, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.bindings.remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over all bindings in no particular order.
    ///
    /// # Example
    /// ```
    /// use gander::{Context, Value};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// assert!(context.namespace.is_empty());
    ///
    /// context.run("a = 1\nb = a == 1\n").unwrap();
    ///
    /// let mut bindings: Vec<_> = context.namespace.iter().collect();
    /// bindings.sort_by_key(|(name, _)| *name);
    ///
    /// assert_eq!(context.namespace.len(), 2);
    /// assert_eq!(bindings, vec![("a", Value::Integer(1)), ("b", Value::Bool(true))]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
