use std::io::Write;

use tracing::trace;

use crate::{
    ast::{Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::scope::Frame,
        symbol_table::{ScopeId, ScopeTree},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// Owns the scope tree produced by semantic analysis, the stack of value
/// frames for the scopes currently entered, and the sink that `print` writes
/// to. Nothing is global, so independent runs never share state.
///
/// ## Usage
///
/// A `Context` is created per program run. [`Context::run`] executes the
/// program's top-level block in the global frame.
///
/// ```
/// use quill::{
///     interpreter::{analyzer::core::analyze, evaluator::core::Context},
///     parse,
/// };
///
/// let program = parse("a: int = 6; print(a / 4)").unwrap();
/// let scopes = analyze(&program).unwrap();
///
/// let mut out = Vec::new();
/// Context::new(scopes, &mut out).run(&program).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1.5\n");
/// ```
pub struct Context<'ast, 'out> {
    pub(super) scopes:  ScopeTree<'ast>,
    pub(super) frames:  Vec<Frame>,
    pub(super) current: ScopeId,
    out:                &'out mut dyn Write,
}

impl<'ast, 'out> Context<'ast, 'out> {
    /// Creates a context positioned in the global frame.
    #[must_use]
    pub fn new(scopes: ScopeTree<'ast>, out: &'out mut dyn Write) -> Self {
        Self { scopes,
               frames: vec![Frame::new(ScopeId::GLOBAL)],
               current: ScopeId::GLOBAL,
               out }
    }

    /// The scope tree this context resolves names against.
    #[must_use]
    pub const fn scopes(&self) -> &ScopeTree<'ast> {
        &self.scopes
    }

    /// Executes every statement of a block, in order, in the current frame.
    ///
    /// # Errors
    /// The first runtime error; later statements are not run.
    pub fn run(&mut self, block: &Block) -> EvalResult<()> {
        block.statements
             .iter()
             .try_for_each(|statement| self.eval_statement(statement))
    }

    /// Executes an `if` or `else` body in a fresh frame for the scope the
    /// analyzer opened for it. A block without a recorded scope runs in the
    /// current frame.
    fn run_branch(&mut self, block: &Block) -> EvalResult<()> {
        let Some(scope) = self.scopes.block_scope(block) else {
            return self.run(block);
        };

        self.enter_scope(scope);
        let result = self.run(block);
        self.leave_scope();
        result
    }

    /// Executes a single statement.
    ///
    /// Declarations bind a new value in the current frame, re-assignments
    /// update the nearest existing binding, `print` writes the value and a
    /// newline to the output sink, and `if` runs one of its blocks in that
    /// block's own frame. Function declarations have no effect at run time.
    ///
    /// # Errors
    /// Any error raised while evaluating the statement's expressions, or
    /// [`RuntimeError::Output`] if printing fails.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assign { name,
                                declared_type: Some(_),
                                value,
                                .. } => {
                let value = self.eval(value)?;
                self.declare_variable(name, value);
                Ok(())
            },
            Statement::Assign { name,
                                declared_type: None,
                                value,
                                line, } => {
                let value = self.eval(value)?;
                self.assign_variable(name, value, *line)
            },
            Statement::If { condition,
                            then_block,
                            else_block,
                            line, } => match self.eval(condition)? {
                Value::Bool(true) => self.run_branch(then_block),
                Value::Bool(false) => else_block.as_ref()
                                                .map_or(Ok(()), |block| self.run_branch(block)),
                other => Err(RuntimeError::ExpectedBoolean { found: other.type_tag(),
                                                             line:  *line, }),
            },
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                trace!(%value, "print");
                writeln!(self.out, "{value}")?;
                Ok(())
            },
            Statement::FuncDecl(_) | Statement::Empty => Ok(()),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Errors
    /// Arithmetic errors (division by zero, overflow, lossy promotion), type
    /// errors on operands, or an unbound name.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Integer(*value)),
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Var { name, line } => self.get_variable(name, *line).cloned(),
            Expr::BinOp { left,
                          op,
                          right,
                          line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::Comparison { left,
                               op,
                               right,
                               line, } => self.eval_comparison(left, *op, right, *line),
        }
    }
}
