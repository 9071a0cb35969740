/// The semantic analyzer checks a parsed program before it runs.
///
/// The analyzer walks the AST once, builds the scope tree, and rejects
/// programs that use undeclared names, declare a name twice in one scope, or
/// combine values of the wrong types. Types are inferred statically; nothing
/// is evaluated.
///
/// # Responsibilities
/// - Creates a scope for every function body and binds parameters in it.
/// - Creates a scope for every `if` and `else` body.
/// - Records every declaration as a symbol in the scope tree.
/// - Reports declaration and type errors with their source line.
pub mod analyzer;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages variable state in value frames, and writes printed output. It
/// relies on the scope tree the analyzer produced to resolve names.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables and control flow.
/// - Reports runtime errors such as division by zero or integer overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces tokens one at
/// a time, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with span and line.
/// - Handles integer and string literals, identifiers, and keywords.
/// - Skips whitespace and block comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer as it needs them and constructs an
/// AST that represents the syntactic structure of the program, using one
/// recursive-descent routine per grammar rule.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
pub mod parser;
/// Scoped name tables.
///
/// Holds the arena of scopes built during analysis, the symbols bound in each,
/// and lookup from a scope outward through its enclosing scopes.
pub mod symbol_table;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program computes with (integers, reals,
/// strings and booleans) and the type tags that describe them.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `TypeTag` enum.
/// - Provides safe promotion between numeric types (integer to real).
/// - Computes static result types for arithmetic.
pub mod value;
