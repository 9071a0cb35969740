/// Declarable type tags.
///
/// Defines `TypeTag`, the built-in type table used to resolve `int`, `str`,
/// `bool` and `float` keywords, and the typing rules for arithmetic and
/// comparisons that the analyzer applies statically.
pub mod type_tag;

/// Runtime values.
pub mod core;
