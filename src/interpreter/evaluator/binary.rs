use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_, '_> {
    /// Evaluates both operands, left first, and applies an arithmetic
    /// operator.
    pub(super) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        apply_arithmetic(op, &left, &right, line)
    }

    /// Evaluates both operands, left first, and compares them.
    pub(super) fn eval_comparison(&self,
                                  left: &Expr,
                                  op: ComparisonOperator,
                                  right: &Expr,
                                  line: usize)
                                  -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        let ordering = compare(&left, &right, line)?;

        Ok(Value::Bool(match op {
                           ComparisonOperator::Less => ordering == Some(Ordering::Less),
                           ComparisonOperator::Greater => ordering == Some(Ordering::Greater),
                       }))
    }
}

/// Applies an arithmetic operator to two values.
///
/// Two integers stay integers under `+ - *`, with overflow checked. Any other
/// numeric mix is computed on `f64`, and `/` always is.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::apply_arithmetic, value::core::Value},
/// };
///
/// let sum = apply_arithmetic(BinaryOperator::Add, &Value::Integer(2), &Value::Real(0.5), 1);
/// assert_eq!(sum.unwrap(), Value::Real(2.5));
///
/// let quotient = apply_arithmetic(BinaryOperator::Div, &Value::Integer(4), &Value::Integer(2), 1);
/// assert_eq!(quotient.unwrap(), Value::Real(2.0));
/// ```
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for a zero divisor.
/// - [`RuntimeError::Overflow`] when integer arithmetic overflows.
/// - [`RuntimeError::PrecisionLoss`] when an integer cannot be promoted to
///   `f64` exactly.
/// - [`RuntimeError::ExpectedNumber`] for a non-numeric operand.
pub fn apply_arithmetic(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
    let checked = match (op, left, right) {
        (BinaryOperator::Add, Value::Integer(a), Value::Integer(b)) => a.checked_add(*b),
        (BinaryOperator::Sub, Value::Integer(a), Value::Integer(b)) => a.checked_sub(*b),
        (BinaryOperator::Mul, Value::Integer(a), Value::Integer(b)) => a.checked_mul(*b),
        _ => return apply_real(op, left.as_real(line)?, right.as_real(line)?, line),
    };

    checked.map(Value::Integer)
           .ok_or(RuntimeError::Overflow { line })
}

#[allow(clippy::float_cmp)]
fn apply_real(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a / b
        },
    };

    Ok(Value::Real(result))
}

/// Orders two numbers, or two booleans (`False < True`).
///
/// Integers are compared exactly; mixed numbers are compared as `f64`, where
/// `NaN` orders with nothing.
fn compare(left: &Value, right: &Value, line: usize) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(b))),
        (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
        _ if left.is_numeric() && right.is_numeric() => {
            Ok(left.as_real(line)?.partial_cmp(&right.as_real(line)?))
        },
        _ => Err(RuntimeError::Incomparable { left: left.type_tag(),
                                              right: right.type_tag(),
                                              line }),
    }
}
