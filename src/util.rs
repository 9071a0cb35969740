/// Numeric conversion helpers.
///
/// This module provides a safe function for promoting integers to
/// floating-point values without silent rounding. Use it whenever an `i64`
/// has to take part in real arithmetic.
pub mod num;
