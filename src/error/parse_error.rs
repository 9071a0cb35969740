use crate::error::LexicalError;

/// Represents all errors that can occur during lexing or parsing.
///
/// The parser pulls tokens from the lexer on demand, so lexical errors
/// surface here too.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer failed while the parser was requesting a token.
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: SyntaxError: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar allowed here.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Two statements that are not separated by `;`.
    #[error("Error on line {line}: SyntaxError: Expected ';' before {found}.")]
    MissingSeparator {
        /// The token that starts the second statement.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Expressions or blocks nested deeper than the parser allows.
    #[error("Error on line {line}: SyntaxError: Nesting deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the limit was exceeded.
        line:  usize,
    },
}
