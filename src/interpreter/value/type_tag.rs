use serde::Serialize;

use crate::ast::BinaryOperator;

/// The declarable types of the language.
///
/// Type tags appear in declarations (`a: int = 1`) and parameter lists, and
/// are attached to every runtime [`Value`](super::core::Value). The semantic
/// analyzer infers a tag for each expression and compares it against the
/// declared one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// `int`: 64-bit signed integers.
    Int,
    /// `float`: double precision reals, produced by division.
    Float,
    /// `str`: string values.
    Str,
    /// `bool`: `True` or `False`.
    Bool,
}

/// The built-in type table, keyed by the keyword used in source code.
pub const BUILTIN_TYPES: &[(&str, TypeTag)] = &[("int", TypeTag::Int),
                                                ("float", TypeTag::Float),
                                                ("str", TypeTag::Str),
                                                ("bool", TypeTag::Bool)];

impl TypeTag {
    /// Resolves a type keyword against the built-in type table.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::type_tag::TypeTag;
    ///
    /// assert_eq!(TypeTag::from_keyword("float"), Some(TypeTag::Float));
    /// assert_eq!(TypeTag::from_keyword("double"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        BUILTIN_TYPES.iter()
                     .find(|(name, _)| *name == keyword)
                     .map(|(_, tag)| *tag)
    }

    /// The keyword spelling of this type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bool => "bool",
        }
    }

    /// Returns `true` for `int` and `float`.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Computes the result type of an arithmetic operator.
    ///
    /// Both operands must be numeric. Division always yields `float`; the
    /// other operators yield `float` when either side is `float` and `int`
    /// otherwise. Returns `None` when the operands cannot be combined.
    #[must_use]
    pub const fn arithmetic_result(op: BinaryOperator, left: Self, right: Self) -> Option<Self> {
        if !left.is_numeric() || !right.is_numeric() {
            return None;
        }

        match (op, left, right) {
            (BinaryOperator::Div, ..) | (_, Self::Float, _) | (_, _, Self::Float) => {
                Some(Self::Float)
            },
            _ => Some(Self::Int),
        }
    }

    /// Returns `true` when two operands of these types can be ordered with
    /// `<` or `>`: two numerics, or two booleans.
    #[must_use]
    pub const fn is_comparable_with(self, other: Self) -> bool {
        (self.is_numeric() && other.is_numeric()) || matches!((self, other), (Self::Bool, Self::Bool))
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
