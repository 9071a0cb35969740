/// Lexical errors.
///
/// Defines the errors raised while turning source text into tokens:
/// unrecognized characters, unterminated strings and comments, and literals
/// outside the grammar.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST, including
/// lexical errors surfaced through the parser's on-demand token reads.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, integer overflow, or
/// failed numeric conversions.
pub mod runtime_error;
/// Semantic analysis errors.
///
/// Declaration errors (undefined or duplicate names) and type errors
/// (mismatched declarations and operands) found before the program runs.
pub mod semantic_error;

pub use lex_error::{LexErrorKind, LexicalError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;

/// The error category of a failed pipeline run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source text could not be tokenized.
    Lexical,
    /// The token stream does not match the grammar.
    Syntax,
    /// A name is undefined or declared twice.
    Declaration,
    /// A value does not fit the required type.
    Type,
    /// Division by zero, overflow or lossy promotion.
    Arithmetic,
    /// An unbound name at evaluation time.
    Name,
    /// Program output could not be written.
    Output,
}

/// Any error produced by the pipeline.
///
/// Each stage returns its own error type; this enum wraps them so `?` can
/// compose the stages, and [`Error::kind`] lets callers branch on the
/// category. Lexical errors arrive inside [`ParseError::Lexical`], because
/// the parser drives the lexer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Semantic analysis failed.
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use quill::{error::ErrorKind, get_result};
    ///
    /// let err = get_result("a: int = \"text\";").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::Lexical(_)) => ErrorKind::Lexical,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Semantic(e) => {
                if e.is_declaration_error() {
                    ErrorKind::Declaration
                } else {
                    ErrorKind::Type
                }
            },
            Self::Runtime(e) => match e {
                RuntimeError::DivisionByZero { .. }
                | RuntimeError::Overflow { .. }
                | RuntimeError::PrecisionLoss { .. } => ErrorKind::Arithmetic,
                RuntimeError::UnboundName { .. } => ErrorKind::Name,
                RuntimeError::ExpectedNumber { .. }
                | RuntimeError::Incomparable { .. }
                | RuntimeError::ExpectedBoolean { .. } => ErrorKind::Type,
                RuntimeError::Output(_) => ErrorKind::Output,
            },
        }
    }
}
