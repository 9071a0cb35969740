use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`. This is the
    /// lowest precedence level of arithmetic, and the entry point for
    /// expressions.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    pub(super) fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;

        while let Some(op) = additive_operator(&self.current.token) {
            let line = self.advance()?.line;
            let right = self.parse_term()?;
            left = Expr::BinOp { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 line };
        }

        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;

        while let Some(op) = multiplicative_operator(&self.current.token) {
            let line = self.advance()?.line;
            let right = self.parse_factor()?;
            left = Expr::BinOp { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 line };
        }

        Ok(left)
    }

    /// Parses the condition of an `if` statement.
    ///
    /// A condition is a bare boolean literal or a single comparison;
    /// comparisons do not chain.
    ///
    /// Grammar:
    /// ```text
    /// condition  := BOOL | comparison
    /// comparison := (BOOL | expr) ("<" | ">") expr
    /// ```
    pub(super) fn parse_condition(&mut self) -> ParseResult<Expr> {
        let left = match self.eat_bool_literal()? {
            Some(literal) if comparison_operator(&self.current.token).is_none() => {
                return Ok(literal);
            },
            Some(literal) => literal,
            None => self.parse_expr()?,
        };

        let Some(op) = comparison_operator(&self.current.token) else {
            return Err(self.unexpected("'<' or '>'"));
        };
        let line = self.advance()?.line;
        let right = self.parse_expr()?;

        Ok(Expr::Comparison { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line })
    }
}

const fn additive_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

const fn multiplicative_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

const fn comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        _ => None,
    }
}
