use serde::Serialize;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::type_tag::TypeTag},
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// Every value carries its [`TypeTag`], which the evaluator uses to pick an
/// arithmetic path and which the analyzer predicted statically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    /// Only produced by division or by mixing with another real.
    Real(f64),
    /// A string value.
    Str(String),
    /// A boolean value, written `True` or `False` in source code.
    /// Produced by comparison operators and boolean literals.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => (*b).into(),
        }
    }
}

impl Value {
    /// Returns the type tag of this value.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::{core::Value, type_tag::TypeTag};
    ///
    /// assert_eq!(Value::Integer(3).type_tag(), TypeTag::Int);
    /// assert_eq!(Value::from("hi").type_tag(), TypeTag::Str);
    /// ```
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Integer(_) => TypeTag::Int,
            Self::Real(_) => TypeTag::Float,
            Self::Str(_) => TypeTag::Str,
            Self::Bool(_) => TypeTag::Bool,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`.
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real or a safe integer.
    /// - `Err(RuntimeError::ExpectedNumber | PrecisionLoss)`: If not numeric
    ///   or not representable.
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64_checked(*n, RuntimeError::PrecisionLoss { line })?),
            _ => Err(RuntimeError::ExpectedNumber { found: self.type_tag(),
                                                    line }),
        }
    }

    /// Returns `true` if the value is an integer or a real.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part, so `2.0` does not print as `2`.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
        }
    }
}
