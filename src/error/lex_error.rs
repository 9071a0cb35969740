use serde::Serialize;

/// The reason a piece of source text could not be tokenized.
///
/// This is the error type of the `logos` token enum, so it must provide a
/// default: logos reports characters that match no rule with
/// [`LexErrorKind::UnrecognizedCharacter`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[default]
    #[error("unrecognized character")]
    UnrecognizedCharacter,
    /// A string literal with no closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A `/*` comment with no closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// An integer literal that does not fit in 64 bits.
    #[error("integer literal is too large")]
    IntegerOverflow,
    /// A literal such as `1.5`. The `float` type can be declared, but the
    /// grammar has no float literals.
    #[error("float literals are not supported")]
    FloatLiteral,
}

/// A lexical error with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Error on line {line}: LexicalError: {kind}: '{fragment}'.")]
pub struct LexicalError {
    /// What went wrong.
    pub kind:     LexErrorKind,
    /// The offending source text.
    pub fragment: String,
    /// Byte offset of the fragment in the source.
    pub offset:   usize,
    /// The source line where the error occurred.
    pub line:     usize,
}
