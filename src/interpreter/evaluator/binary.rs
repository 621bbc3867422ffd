/// Operator dispatch on operand types, and string concatenation.
pub mod core;

/// Integer and float arithmetic and ordering.
pub mod scalar;

/// The identity equality behind `==` and `!=` for non-numeric values.
pub mod comparison;

pub use self::core::eval_infix;
