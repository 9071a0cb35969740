use crate::{
    ast::Block,
    error::ParseError,
    interpreter::lexer::{Lexer, SpannedToken, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deep prefix operators, parentheses and braced blocks may nest.
pub const MAX_NESTING: usize = 128;

/// A recursive-descent parser with a single token of lookahead.
///
/// Tokens are pulled from the [`Lexer`] only when the parser advances, so a
/// lexical error deep in the source is reported when the parser reaches it.
///
/// Grammar:
/// ```text
/// program        := statement_list EOF
/// statement_list := statement (";" statement)*
/// statement      := assignment | print_stmt | if_stmt | func_decl | empty
/// ```
pub struct Parser<'src> {
    lexer:              Lexer<'src>,
    pub(super) current: SpannedToken,
    depth:              usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// A [`ParseError::Lexical`] if the first token cannot be lexed.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  depth: 0 })
    }

    /// Parses a whole program.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{lexer::Lexer, parser::core::Parser};
    ///
    /// let program = Parser::new(Lexer::new("a: int = 1; print(a)")).unwrap()
    ///                                                              .parse()
    ///                                                              .unwrap();
    /// assert_eq!(program.statements.len(), 2);
    /// ```
    ///
    /// # Errors
    /// The first lexical or syntax error in the source.
    pub fn parse(mut self) -> ParseResult<Block> {
        let program = self.parse_statement_list()?;
        self.expect_list_end(TokenKind::Eof)?;
        Ok(program)
    }

    /// Moves to the next token and returns the one just passed.
    pub(super) fn advance(&mut self) -> ParseResult<SpannedToken> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    /// `UnexpectedToken` naming `kind` and the token found.
    pub(super) fn eat(&mut self, kind: TokenKind) -> ParseResult<SpannedToken> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// Returns `true` if the current token has the given kind.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current.token.kind() == kind
    }

    /// The line of the current token.
    pub(super) const fn line(&self) -> usize {
        self.current.line
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` once more than [`MAX_NESTING`] levels are open, or
    /// whatever `parse` returns.
    pub(super) fn nested<T>(&mut self,
                            parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    line:  self.line(), });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Builds a syntax error for the current token.
    pub(super) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.into(),
                                      found:    self.current.token.describe(),
                                      line:     self.current.line, }
    }
}
