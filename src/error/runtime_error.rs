use crate::interpreter::value::type_tag::TypeTag;

/// Represents all errors that can occur during evaluation.
///
/// Semantic analysis rules out most of these before the program runs; the
/// arithmetic variants are the ones a checked program can still hit.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error on line {line}: ArithmeticError: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: ArithmeticError: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer too large to be promoted to a float without rounding.
    #[error("Error on line {line}: ArithmeticError: Integer is too large to convert to float.")]
    PrecisionLoss {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Referenced a name that has no value bound in any enclosing scope.
    #[error("Error on line {line}: NameError: Variable '{name}' is not defined.")]
    UnboundName {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric value was expected, but not found.
    #[error("Error on line {line}: TypeError: Expected a number, found {found}.")]
    ExpectedNumber {
        /// The type actually found.
        found: TypeTag,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Operands of a comparison that cannot be ordered.
    #[error("Error on line {line}: TypeError: Cannot compare {left} and {right}.")]
    Incomparable {
        /// Type of the left operand.
        left:  TypeTag,
        /// Type of the right operand.
        right: TypeTag,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An `if` condition that did not produce a boolean.
    #[error("Error on line {line}: TypeError: Expected a boolean condition, found {found}.")]
    ExpectedBoolean {
        /// The type actually found.
        found: TypeTag,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing program output failed.
    #[error("failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}
