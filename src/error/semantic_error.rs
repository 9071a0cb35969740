use crate::interpreter::value::type_tag::TypeTag;

/// Represents all errors raised by semantic analysis.
///
/// Variants fall into two categories: declaration errors (names that are
/// missing or declared twice) and type errors (values that do not fit the
/// declared or required type).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    /// Tried to use or re-assign a name that is not declared in any enclosing
    /// scope.
    #[error("Error on line {line}: DeclarationError: Variable not defined: '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a name that the current scope already binds.
    #[error("Error on line {line}: DeclarationError: Duplicate assignment of '{name}'.")]
    DuplicateDeclaration {
        /// The declared name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The value's type differs from the declared type of the variable.
    #[error("Error on line {line}: TypeError: Invalid assignment to '{name}': expected {declared}, found {found}.")]
    InvalidAssignment {
        /// The name of the variable.
        name:     String,
        /// The type the variable was declared with.
        declared: TypeTag,
        /// The type of the assigned value.
        found:    TypeTag,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary or comparison operator applied to operand types it does not
    /// support.
    #[error("Error on line {line}: TypeError: Cannot use '{op}' on {left} and {right}.")]
    InvalidOperands {
        /// The operator.
        op:    String,
        /// Type of the left operand.
        left:  TypeTag,
        /// Type of the right operand.
        right: TypeTag,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator applied to a non-numeric operand.
    #[error("Error on line {line}: TypeError: Cannot use unary '{op}' on {operand}.")]
    InvalidUnaryOperand {
        /// The operator.
        op:      String,
        /// Type of the operand.
        operand: TypeTag,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A function name used where a variable is required.
    #[error("Error on line {line}: TypeError: '{name}' is a function, not a variable.")]
    NotAVariable {
        /// The function name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl SemanticError {
    /// Returns `true` for the declaration-error category.
    #[must_use]
    pub const fn is_declaration_error(&self) -> bool {
        matches!(self, Self::UndefinedVariable { .. } | Self::DuplicateDeclaration { .. })
    }
}
