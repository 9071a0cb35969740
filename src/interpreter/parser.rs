/// Core parser state and token handling.
///
/// Defines the [`Parser`](core::Parser) itself: one token of lookahead pulled
/// from the lexer on demand, plus `eat` and the program entry point.
pub mod core;

/// Unary and primary parsing.
///
/// Handles prefix `+`/`-` and the atoms of arithmetic: integer literals,
/// names and parenthesized expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, and the
/// comparisons allowed in `if` conditions.
pub mod binary;

/// Statement lists and braced blocks.
///
/// Enforces the separator rule between statements.
pub mod block;

/// Small helpers shared by the parsing routines.
pub mod utils;

/// Statement parsing.
///
/// Declarations, re-assignments, `print`, `if`/`else` and function
/// declarations.
pub mod statement;
