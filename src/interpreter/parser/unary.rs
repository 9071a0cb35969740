use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression or an atom.
    ///
    /// Prefix operators are right-associative, so `- -x` is `-(-x)`.
    ///
    /// Grammar:
    /// ```text
    /// factor := ("+" | "-") factor | INTEGER | "(" expr ")" | NAME
    /// ```
    pub(super) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let op = match self.current.token {
            Token::Plus => Some(UnaryOperator::Plus),
            Token::Minus => Some(UnaryOperator::Negate),
            _ => None,
        };
        if let Some(op) = op {
            let line = self.advance()?.line;
            let expr = self.nested(Self::parse_factor)?;
            return Ok(Expr::UnaryOp { op,
                                      expr: Box::new(expr),
                                      line });
        }

        match &self.current.token {
            Token::Integer(value) => {
                let value = *value;
                let line = self.advance()?.line;
                Ok(Expr::Number { value, line })
            },
            Token::Identifier(name) => {
                let name = name.clone();
                let line = self.advance()?.line;
                Ok(Expr::Var { name, line })
            },
            Token::LParen => {
                self.advance()?;
                let expr = self.nested(Self::parse_expr)?;
                self.eat(TokenKind::RParen)?;
                Ok(expr)
            },
            _ => Err(self.unexpected("an expression")),
        }
    }
}
