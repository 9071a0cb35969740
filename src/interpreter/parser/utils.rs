use crate::{
    ast::{Expr, LiteralValue},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
        value::type_tag::TypeTag,
    },
};

impl Parser<'_> {
    /// Consumes a name and returns it with its line.
    pub(super) fn eat_identifier(&mut self) -> ParseResult<(String, usize)> {
        if let Token::Identifier(name) = &self.current.token {
            let found = (name.clone(), self.line());
            self.advance()?;
            return Ok(found);
        }

        Err(self.unexpected(TokenKind::Identifier.describe()))
    }

    /// Consumes a type keyword.
    pub(super) fn eat_type(&mut self) -> ParseResult<TypeTag> {
        match self.current.token {
            Token::Type(tag) => {
                self.advance()?;
                Ok(tag)
            },
            _ => Err(self.unexpected(TokenKind::Type.describe())),
        }
    }

    /// Returns `true` if the current token can only begin a statement.
    pub(super) fn starts_statement(&self) -> bool {
        matches!(self.current.token.kind(),
                 TokenKind::Identifier | TokenKind::Print | TokenKind::If | TokenKind::Func)
    }

    /// Consumes a string literal, if one is next.
    pub(super) fn eat_string_literal(&mut self) -> ParseResult<Option<Expr>> {
        let Token::Str(text) = &self.current.token else {
            return Ok(None);
        };
        let value = LiteralValue::Str(text.clone());
        let line = self.advance()?.line;

        Ok(Some(Expr::Literal { value, line }))
    }

    /// Consumes a boolean literal, if one is next.
    pub(super) fn eat_bool_literal(&mut self) -> ParseResult<Option<Expr>> {
        let Token::Bool(flag) = self.current.token else {
            return Ok(None);
        };
        let line = self.advance()?.line;

        Ok(Some(Expr::Literal { value: LiteralValue::Bool(flag),
                                line }))
    }
}
