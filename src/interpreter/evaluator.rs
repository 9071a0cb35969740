/// Binary operator evaluation logic.
///
/// Handles the execution of arithmetic operators and of the comparisons used
/// in `if` conditions.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements unary plus and arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and statement
/// execution.
pub mod core;

/// Value frames and name resolution.
///
/// Binds, updates and looks up variable values along the scope chain that
/// semantic analysis recorded.
pub mod scope;
