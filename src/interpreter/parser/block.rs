use crate::{
    ast::{Block, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a list of statements.
    ///
    /// Statements are separated by `;`. A statement that ends in a closing
    /// brace (`if`/`else`, function declarations) may be followed directly
    /// by the next statement. The list stops at the first token that can
    /// neither separate nor start a statement; the caller decides whether that
    /// token is acceptable.
    ///
    /// Grammar: `statement_list := statement (";" statement)*`
    pub(super) fn parse_statement_list(&mut self) -> ParseResult<Block> {
        let line = self.line();
        let mut statements = vec![self.parse_statement()?];

        loop {
            let brace_terminated = statements.last().is_some_and(Statement::is_brace_terminated);

            if self.check(TokenKind::Semicolon) {
                self.advance()?;
            } else if !(brace_terminated && self.starts_statement()) {
                break;
            }

            statements.push(self.parse_statement()?);
        }

        Ok(Block { statements, line })
    }

    /// Parses `"{" statement_list "}"`.
    pub(super) fn parse_braced_block(&mut self) -> ParseResult<Block> {
        self.eat(TokenKind::LBrace)?;
        let block = self.nested(Self::parse_statement_list)?;
        self.expect_list_end(TokenKind::RBrace)?;
        Ok(block)
    }

    /// Consumes the token that must close a statement list.
    ///
    /// # Errors
    /// `MissingSeparator` when the leftover token starts another statement,
    /// `UnexpectedToken` otherwise.
    pub(super) fn expect_list_end(&mut self, closing: TokenKind) -> ParseResult<()> {
        if self.check(closing) {
            if closing != TokenKind::Eof {
                self.advance()?;
            }
            return Ok(());
        }

        if self.starts_statement() {
            return Err(ParseError::MissingSeparator { found: self.current.token.describe(),
                                                      line:  self.line(), });
        }

        Err(self.unexpected(format!("';' or {}", closing.describe())))
    }
}
