/// Declaration checking and the scope walk.
///
/// Defines the [`Analyzer`](core::Analyzer) and the [`analyze`](core::analyze)
/// entry point, which returns the populated scope tree.
pub mod core;

/// Static type inference for expressions.
pub mod expression;
