use std::fmt;

/// Represents a runtime value in the interpreter.
///
/// Every node evaluates to exactly one `Value`. `Nil` and `Bool(false)` are
/// falsy; every other value, including `Integer(0)`, is truthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Value {
    /// The absence of a value. Unbound variables evaluate to `Nil`.
    #[default]
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A integer value (64 bit integer).
    Integer(i64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns `false` for `nil` and `false`, `true` for everything else.
    ///
    /// # Example
    /// ```
    /// use gander::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Integer(0).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Logical `and`: yields `other` when both operands are truthy, otherwise
    /// `false`.
    ///
    /// Both operands are already evaluated; there is no short-circuiting of
    /// side effects.
    ///
    /// # Example
    /// ```
    /// use gander::Value;
    ///
    /// assert_eq!(Value::Integer(1).and(Value::Integer(2)), Value::Integer(2));
    /// assert_eq!(Value::Bool(false).and(Value::Integer(1)), Value::Bool(false));
    /// ```
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        if self.is_truthy() && other.is_truthy() {
            other
        } else {
            Self::Bool(false)
        }
    }

    /// Logical `or`: yields the first truthy operand, otherwise `false`.
    ///
    /// # Example
    /// ```
    /// use gander::Value;
    ///
    /// assert_eq!(Value::Nil.or(Value::Integer(3)), Value::Integer(3));
    /// assert_eq!(Value::Nil.or(Value::Nil), Value::Bool(false));
    /// ```
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        if self.is_truthy() {
            self
        } else if other.is_truthy() {
            other
        } else {
            Self::Bool(false)
        }
    }

    /// Structural equality: tags and payloads must both match.
    ///
    /// `1 == true` is `false` even though both operands are truthy.
    #[must_use]
    pub fn equals(self, other: Self) -> Self {
        Self::Bool(self == other)
    }

    /// Negation of [`Value::equals`].
    #[must_use]
    pub fn not_equals(self, other: Self) -> Self {
        Self::Bool(self != other)
    }

    /// Name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "int",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}
