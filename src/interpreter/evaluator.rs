/// Core evaluation: programs, blocks, statements and expression dispatch.
///
/// Contains the `evaluate` entry point and the `EvalResult` type shared by the
/// rest of the evaluator.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!` for every value and `-` for numbers.
pub mod unary;

/// Infix operator evaluation.
///
/// Arithmetic with integer/float promotion, string concatenation, ordering
/// and equality.
pub mod binary;

/// Indexing and hash construction.
///
/// Evaluates `a[i]` on arrays and hashes and builds hash objects from
/// literals.
pub mod index;

/// Function application and the builtin table.
///
/// Calls closures in fresh enclosed scopes and dispatches builtins after
/// checking their arity.
pub mod function;

/// The `quote` special form and `unquote` splicing.
pub mod quote;

/// Utility functions for evaluation.
///
/// Provides argument checks shared by builtins and function calls.
pub mod utils;

pub use self::core::{EvalResult, Flow, Unwind, evaluate};
