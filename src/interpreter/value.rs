use std::{fmt, rc::Rc};

use crate::{ast::LiteralValue, util::num::format_number_display};

/// Represents a runtime value in the interpreter.
///
/// The language is dynamically typed; every operation checks the variant it
/// receives. Values of different variants are never equal and there is no
/// implicit conversion between them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::from(s.as_str()),
        }
    }
}

impl Value {
    /// Applies the truthiness rule: `nil` and `false` are falsy, every other
    /// value (including `0` and `""`) is truthy.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }
}

/// The display form used by `print` and by expression evaluation output.
///
/// Integral numbers print without a fractional part, `nil` prints as `nil`
/// and strings print without quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number_display(*n)),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}
