use std::ops::Range;

use logos::{FilterResult, Logos};
use serde::Serialize;

use crate::{
    error::{LexErrorKind, LexicalError},
    interpreter::value::type_tag::TypeTag,
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexicalError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Literal tokens carry their decoded value.
#[derive(Logos, Debug, PartialEq, Clone, Serialize)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    #[regex(r"[0-9]+\.[0-9]*", reject_float)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`.
    #[token("\"", lex_string)]
    Str(String),
    /// Boolean literal tokens: `True` or `False`.
    #[token("True", |_| true)]
    #[token("False", |_| false)]
    Bool(bool),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// Identifier tokens; variable or function names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Type keywords: `int`, `float`, `str`, `bool`.
    #[token("int", type_keyword)]
    #[token("float", type_keyword)]
    #[token("str", type_keyword)]
    #[token("bool", type_keyword)]
    Type(TypeTag),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `print`
    #[token("print")]
    Print,
    /// `func`
    #[token("func")]
    Func,
    /// End of input. Never matched by a rule; produced by [`Lexer`] once the
    /// source is exhausted.
    Eof,

    /// Block comments: `/* ... */`.
    #[token("/*", skip_block_comment)]
    BlockComment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Any whitespace other than `\n`, including vertical tabs, the ASCII
    /// separators `\x1C`-`\x1F` and Unicode spaces.
    #[regex(r"[\s\x1C-\x1F--\n]+", logos::skip)]
    Ignored,
}

/// A field-less mirror of [`Token`], used to state what the parser expects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer literal.
    Integer,
    /// String literal.
    Str,
    /// Boolean literal.
    Bool,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Equals,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// Name.
    Identifier,
    /// Type keyword.
    Type,
    /// `if`
    If,
    /// `else`
    Else,
    /// `print`
    Print,
    /// `func`
    Func,
    /// End of input.
    Eof,
}

impl Token {
    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Str(_) => TokenKind::Str,
            Self::Bool(_) => TokenKind::Bool,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Equals => TokenKind::Equals,
            Self::Less => TokenKind::Less,
            Self::Greater => TokenKind::Greater,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::Colon => TokenKind::Colon,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Comma => TokenKind::Comma,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Type(_) => TokenKind::Type,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::Print => TokenKind::Print,
            Self::Func => TokenKind::Func,
            // Skipped tokens never leave the lexer.
            Self::Eof | Self::BlockComment | Self::NewLine | Self::Ignored => TokenKind::Eof,
        }
    }

    /// Describes the token for error messages: quoted source text, or
    /// `end of input`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Eof => "end of input".to_string(),
            _ => format!("'{self}'"),
        }
    }
}

/// Renders a token back into source text.
///
/// String literals are re-quoted and re-escaped, so lexing the rendered text
/// yields the same token.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                write!(f, "\"")
            },
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Type(tag) => write!(f, "{tag}"),
            Self::Eof | Self::BlockComment | Self::NewLine | Self::Ignored => Ok(()),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

impl TokenKind {
    /// Describes the kind for error messages: punctuation and keywords are
    /// quoted, classes of tokens are named.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::Integer | Self::Str | Self::Bool | Self::Identifier | Self::Type | Self::Eof => {
                self.to_string()
            },
            _ => format!("'{self}'"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Integer => "integer literal",
            Self::Str => "string literal",
            Self::Bool => "boolean literal",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Equals => "=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Identifier => "name",
            Self::Type => "type",
            Self::If => "if",
            Self::Else => "else",
            Self::Print => "print",
            Self::Func => "func",
            Self::Eof => "end of input",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented by newlines, including those inside comments and strings.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token together with where it was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpannedToken {
    /// The token.
    pub token: Token,
    /// Byte range of the token in the source.
    pub span:  Range<usize>,
    /// The line the token ends on.
    pub line:  usize,
}

/// A lazy tokenizer over one source string.
///
/// Wraps the generated `logos` lexer: tokens are produced one at a time by
/// [`Lexer::next_token`], and once the input is exhausted every further call
/// returns [`Token::Eof`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Produces the next token.
    ///
    /// Whitespace and comments are skipped. At the end of input this returns
    /// an `Eof` token, and keeps doing so on every later call.
    ///
    /// # Errors
    /// Returns a [`LexicalError`] for text that starts no valid token.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("awd   d");
    /// assert_eq!(lexer.next_token().unwrap().span, 0..3);
    ///
    /// let second = lexer.next_token().unwrap();
    /// assert_eq!(second.token, Token::Identifier("d".to_string()));
    /// assert_eq!(second.span.start, 6);
    ///
    /// assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
    /// assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
    /// ```
    pub fn next_token(&mut self) -> LexResult<SpannedToken> {
        let line = self.inner.extras.line;
        match self.inner.next() {
            Some(Ok(token)) => Ok(SpannedToken { token,
                                                 span: self.inner.span(),
                                                 line: self.inner.extras.line }),
            Some(Err(kind)) => Err(LexicalError { kind,
                                                  fragment: self.inner.slice().to_string(),
                                                  offset: self.inner.span().start,
                                                  line }),
            None => {
                let end = self.inner.source().len();
                Ok(SpannedToken { token: Token::Eof,
                                  span: end..end,
                                  line: self.inner.extras.line })
            },
        }
    }
}

/// Yields tokens up to, but not including, `Eof`.
impl Iterator for Lexer<'_> {
    type Item = LexResult<SpannedToken>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(SpannedToken { token: Token::Eof, .. }) => None,
            other => Some(other),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// `IntegerOverflow` if the digits do not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::IntegerOverflow)
}

/// Resolves a type keyword through the built-in type table.
fn type_keyword(lex: &logos::Lexer<Token>) -> Option<TypeTag> {
    TypeTag::from_keyword(lex.slice())
}

/// Rejects float literals such as `3.14` or `3.`.
fn reject_float(_: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    Err(LexErrorKind::FloatLiteral)
}

/// Collects a string literal after its opening quote.
///
/// Characters are taken up to the first unescaped `"`. The escapes `\"`,
/// `\\`, `\n` and `\t` are decoded; any other backslash is kept as written.
///
/// # Errors
/// `UnterminatedString` if the input ends first.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let remainder = lex.remainder();
    let mut contents = String::new();
    let mut chars = remainder.char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(offset + 1);
                return Ok(contents);
            },
            '\\' => match chars.next() {
                Some((_, '"')) => contents.push('"'),
                Some((_, '\\')) => contents.push('\\'),
                Some((_, 'n')) => contents.push('\n'),
                Some((_, 't')) => contents.push('\t'),
                Some((_, other)) => {
                    contents.push('\\');
                    if other == '\n' {
                        lex.extras.line += 1;
                    }
                    contents.push(other);
                },
                None => break,
            },
            '\n' => {
                lex.extras.line += 1;
                contents.push(c);
            },
            _ => contents.push(c),
        }
    }

    lex.bump(remainder.len());
    Err(LexErrorKind::UnterminatedString)
}

/// Skips a block comment after its opening `/*`, counting the lines it spans.
fn skip_block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexErrorKind> {
    let remainder = lex.remainder();

    if let Some(end) = remainder.find("*/") {
        lex.extras.line += remainder[..end].matches('\n').count();
        lex.bump(end + 2);
        FilterResult::Skip
    } else {
        lex.extras.line += remainder.matches('\n').count();
        lex.bump(remainder.len());
        FilterResult::Error(LexErrorKind::UnterminatedComment)
    }
}
