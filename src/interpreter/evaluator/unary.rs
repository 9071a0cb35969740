use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_, '_> {
    /// Evaluates a unary operator.
    ///
    /// `+` returns a number unchanged. `-` negates it; negating `i64::MIN`
    /// overflows.
    ///
    /// # Errors
    /// [`RuntimeError::ExpectedNumber`] for a non-numeric operand,
    /// [`RuntimeError::Overflow`] for an overflowing negation.
    pub(super) fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Value> {
        match (op, self.eval(expr)?) {
            (UnaryOperator::Plus, value) if value.is_numeric() => Ok(value),
            (UnaryOperator::Negate, Value::Integer(n)) => n.checked_neg()
                                                           .map(Value::Integer)
                                                           .ok_or(RuntimeError::Overflow { line }),
            (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
            (_, other) => Err(RuntimeError::ExpectedNumber { found: other.type_tag(),
                                                             line }),
        }
    }
}
