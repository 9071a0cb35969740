use crate::{
    ast::{Expr, LiteralValue},
    error::SemanticError,
    interpreter::{
        analyzer::core::{AnalysisResult, Analyzer},
        value::type_tag::TypeTag,
    },
};

impl Analyzer<'_> {
    /// Infers the type of an expression without evaluating it.
    ///
    /// - Literals have their own type; names have their declared type.
    /// - `+ - *` need two numeric operands and give `float` if either is a
    ///   `float`, `int` otherwise. `/` always gives `float`.
    /// - Unary `+` and `-` keep a numeric type.
    /// - A comparison of two numbers or two booleans is a `bool`.
    ///
    /// # Errors
    /// `InvalidOperands` or `InvalidUnaryOperand` for other operand mixes, and
    /// the lookup errors of any name in the expression.
    pub fn type_of(&self, expr: &Expr) -> AnalysisResult<TypeTag> {
        match expr {
            Expr::Number { .. } => Ok(TypeTag::Int),
            Expr::Literal { value: LiteralValue::Str(_),
                            .. } => Ok(TypeTag::Str),
            Expr::Literal { value: LiteralValue::Bool(_),
                            .. } => Ok(TypeTag::Bool),
            Expr::Var { name, line } => self.variable_type(name, *line),
            Expr::BinOp { left,
                          op,
                          right,
                          line, } => {
                let (left, right) = (self.type_of(left)?, self.type_of(right)?);
                TypeTag::arithmetic_result(*op, left, right).ok_or_else(|| {
                    SemanticError::InvalidOperands { op: op.to_string(),
                                                     left,
                                                     right,
                                                     line: *line }
                })
            },
            Expr::UnaryOp { op, expr, line } => {
                let operand = self.type_of(expr)?;
                if operand.is_numeric() {
                    Ok(operand)
                } else {
                    Err(SemanticError::InvalidUnaryOperand { op: op.to_string(),
                                                             operand,
                                                             line: *line })
                }
            },
            Expr::Comparison { left,
                               op,
                               right,
                               line, } => {
                let (left, right) = (self.type_of(left)?, self.type_of(right)?);
                if left.is_comparable_with(right) {
                    Ok(TypeTag::Bool)
                } else {
                    Err(SemanticError::InvalidOperands { op: op.to_string(),
                                                         left,
                                                         right,
                                                         line: *line })
                }
            },
        }
    }
}
