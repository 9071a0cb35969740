//! # quill
//!
//! quill is a small, statically checked scripting language written in Rust.
//! Source text is tokenized, parsed into an AST, checked for declaration and
//! type errors, and then executed by a tree-walking evaluator.
//!
//! ```
//! let output = quill::get_result("x: int = 2 + 3 * 4; print(x)").unwrap();
//! assert_eq!(output, "14\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    ast::Block,
    error::{Error, LexicalError, ParseError},
    interpreter::{
        analyzer::core::analyze,
        evaluator::core::Context,
        lexer::{Lexer, SpannedToken},
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser, checked by the analyzer and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for every stage of the pipeline.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// analysis or evaluation, each carrying the line it was found on, and a
/// top-level error that wraps them all.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Attaches line numbers and detailed messages for context.
/// - Classifies any failure into an [`ErrorKind`](error::ErrorKind).
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, semantic analysis, evaluation
/// and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer, evaluator, and
///   value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert `i64` to `f64` without silent data loss.
pub mod util;

/// Tokenizes a whole source string.
///
/// # Example
/// ```
/// use quill::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("print(\"hi\")").unwrap();
/// let tokens: Vec<Token> = tokens.into_iter().map(|t| t.token).collect();
/// assert_eq!(tokens,
///            [Token::Print, Token::LParen, Token::Str("hi".to_string()), Token::RParen]);
/// ```
///
/// # Errors
/// The first lexical error in the source.
#[tracing::instrument(level = "trace", skip_all)]
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexicalError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Parses a source string into its program block.
///
/// # Errors
/// The first lexical or syntax error in the source.
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(source: &str) -> Result<Block, ParseError> {
    let program = Parser::new(Lexer::new(source))?.parse()?;
    debug!(statements = program.statements.len(), "parsed program");
    Ok(program)
}

/// Lexes, parses and analyzes a source string without running it.
///
/// # Example
/// ```
/// use quill::{check, error::ErrorKind};
///
/// assert!(check("a: int = 1; print(a)").is_ok());
/// assert_eq!(check("print(b)").unwrap_err().kind(), ErrorKind::Declaration);
/// ```
///
/// # Errors
/// The first lexical, syntax, declaration or type error.
#[tracing::instrument(level = "trace", skip_all)]
pub fn check(source: &str) -> Result<(), Error> {
    let program = parse(source)?;
    let scopes = analyze(&program)?;
    debug!(scopes = scopes.len(), "analysis passed");
    Ok(())
}

/// Runs a source string, writing printed output to `out`.
///
/// Nothing is executed unless the whole program lexes, parses and passes
/// analysis. Output written before a runtime error stays written.
///
/// # Errors
/// The first error from any stage.
#[tracing::instrument(level = "trace", skip_all)]
pub fn run(source: &str, out: &mut dyn Write) -> Result<(), Error> {
    let program = parse(source)?;
    let scopes = analyze(&program)?;
    debug!(scopes = scopes.len(), "analysis passed");

    Context::new(scopes, out).run(&program)?;
    debug!("program finished");
    Ok(())
}

/// Runs a source string and returns everything it printed.
///
/// # Examples
/// ```
/// use quill::get_result;
///
/// // Division always yields a float.
/// let output = get_result("a: float = 7 / 2; print(a)").unwrap();
/// assert_eq!(output, "3.5\n");
///
/// // 'x' is not defined.
/// let res = get_result("y: int = x + 1;");
/// assert!(res.is_err());
/// ```
///
/// # Errors
/// The first error from any stage.
pub fn get_result(source: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(source, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
