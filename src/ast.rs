use serde::Serialize;

use crate::interpreter::value::type_tag::TypeTag;

/// Represents a non-numeric literal value in the language.
///
/// Integer literals have their own [`Expr::Number`] node; strings and booleans
/// are only ever used as whole values (an initializer, a `print` argument or
/// the left side of a condition), so they share this wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LiteralValue {
    /// A string literal, with escapes already decoded.
    Str(String),
    /// A boolean literal value: `True` or `False`.
    Bool(bool),
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Each variant models a distinct syntactic construct and records the source
/// line it was parsed from. Children are boxed and exclusively owned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal's value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string or boolean literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Var {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (`+x` or `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A `<` or `>` comparison. Only appears as an `if` condition.
    Comparison {
        /// Left operand.
        left:  Box<Self>,
        /// The comparison operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quill::ast::Expr;
    ///
    /// let expr = Expr::Var { name: "x".to_string(),
    ///                        line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Literal { line, .. }
            | Self::Var { line, .. }
            | Self::BinOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::Comparison { line, .. } => *line,
        }
    }
}

/// An ordered list of statements.
///
/// The program root is a block, as are the bodies of `if`/`else` branches and
/// function declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
    /// Line number in the source code.
    pub line:       usize,
}

/// A typed function parameter (`name: type`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// The parameter name.
    pub name:     String,
    /// The declared type.
    pub type_tag: TypeTag,
    /// Line number in the source code.
    pub line:     usize,
}

/// Represents a user-defined function declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameters, in declaration order.
    pub params: Vec<Param>,
    /// The function body.
    pub body:   Block,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// A declaration (`name: type = value`) when `declared_type` is set, or a
    /// re-assignment (`name = value`) otherwise.
    Assign {
        /// The name of the variable.
        name:          String,
        /// The type annotation of a declaration.
        declared_type: Option<TypeTag>,
        /// The value which is being assigned.
        value:         Expr,
        /// Line number in the source code.
        line:          usize,
    },
    /// `if (condition) { ... } else { ... }`
    If {
        /// A boolean literal or a comparison.
        condition:  Expr,
        /// Statements run when the condition holds.
        then_block: Block,
        /// Statements run otherwise.
        else_block: Option<Block>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A user-defined function declaration.
    FuncDecl(FunctionDef),
    /// `print(value)`
    Print {
        /// The printed expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// The empty statement, e.g. after a trailing `;`.
    Empty,
}

impl Statement {
    /// Returns `true` for statements that end in a closing brace and so do not
    /// need a `;` before the next statement.
    #[must_use]
    pub const fn is_brace_terminated(&self) -> bool {
        matches!(self, Self::If { .. } | Self::FuncDecl(_))
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), always real-valued.
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    /// Unary plus (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum ComparisonOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
        }
    }
}
