use crate::{
    ast::{Expr, FunctionDef, Param, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// The statement kind is chosen by the current token; any token that
    /// cannot start a statement yields [`Statement::Empty`] without being
    /// consumed.
    ///
    /// Grammar:
    /// ```text
    /// statement := assignment | print_stmt | if_stmt | func_decl | empty
    /// ```
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.token.kind() {
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::Print => self.parse_print(),
            TokenKind::If => self.parse_if(),
            TokenKind::Func => Ok(Statement::FuncDecl(self.parse_function_declaration()?)),
            _ => Ok(Statement::Empty),
        }
    }

    /// Parses a declaration or a re-assignment.
    ///
    /// Grammar: `assignment := NAME ("=" value | ":" TYPE "=" value)`
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let (name, line) = self.eat_identifier()?;

        let declared_type = match self.current.token.kind() {
            TokenKind::Colon => {
                self.advance()?;
                Some(self.eat_type()?)
            },
            TokenKind::Equals => None,
            _ => return Err(self.unexpected("':' or '='")),
        };

        self.eat(TokenKind::Equals)?;
        let value = self.parse_value()?;

        Ok(Statement::Assign { name,
                               declared_type,
                               value,
                               line })
    }

    /// Parses the right side of an assignment or a `print` argument.
    ///
    /// Grammar: `value := STRING | BOOL | expr`
    fn parse_value(&mut self) -> ParseResult<Expr> {
        if let Some(literal) = self.eat_string_literal()? {
            return Ok(literal);
        }
        if let Some(literal) = self.eat_bool_literal()? {
            return Ok(literal);
        }
        self.parse_expr()
    }

    /// Grammar: `print_stmt := "print" "(" value ")"`
    fn parse_print(&mut self) -> ParseResult<Statement> {
        let line = self.eat(TokenKind::Print)?.line;
        self.eat(TokenKind::LParen)?;
        let expr = self.parse_value()?;
        self.eat(TokenKind::RParen)?;

        Ok(Statement::Print { expr, line })
    }

    /// Parses an `if` statement with an optional `else` branch.
    ///
    /// Grammar:
    /// ```text
    /// if_stmt := "if" "(" condition ")" "{" statement_list "}"
    ///            ("else" "{" statement_list "}")?
    /// ```
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.eat(TokenKind::If)?.line;

        self.eat(TokenKind::LParen)?;
        let condition = self.parse_condition()?;
        self.eat(TokenKind::RParen)?;

        let then_block = self.parse_braced_block()?;

        let else_block = if self.check(TokenKind::Else) {
            self.advance()?;
            Some(self.parse_braced_block()?)
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_block,
                           else_block,
                           line })
    }

    /// Parses a function declaration.
    ///
    /// Grammar:
    /// ```text
    /// func_decl := "func" NAME "(" params? ")" "{" statement_list "}"
    /// params    := param ("," param)*
    /// ```
    fn parse_function_declaration(&mut self) -> ParseResult<FunctionDef> {
        let line = self.eat(TokenKind::Func)?.line;
        let (name, _) = self.eat_identifier()?;

        self.eat(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            params.push(self.parse_param()?);
            while self.check(TokenKind::Comma) {
                self.advance()?;
                params.push(self.parse_param()?);
            }
        }
        self.eat(TokenKind::RParen)?;

        let body = self.parse_braced_block()?;

        Ok(FunctionDef { name,
                         params,
                         body,
                         line })
    }

    /// Grammar: `param := NAME ":" TYPE`
    fn parse_param(&mut self) -> ParseResult<Param> {
        let (name, line) = self.eat_identifier()?;
        self.eat(TokenKind::Colon)?;
        let type_tag = self.eat_type()?;

        Ok(Param { name,
                   type_tag,
                   line })
    }
}
