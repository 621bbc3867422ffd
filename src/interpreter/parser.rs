/// Parser state, precedence climbing and the dispatch tables.
///
/// Owns the two-token lookahead and the accumulated errors, and drives
/// `parse_program` and `parse_expression`.
pub mod core;

/// Statement and block parsing.
///
/// Handles `let`, `return`, expression statements and `{ ... }` blocks.
pub mod statement;

/// Handlers for tokens that start an expression.
///
/// Literals, identifiers, prefix operators, grouping, `if`, function and
/// macro literals, arrays and hashes.
pub mod prefix;

/// Handlers for tokens that continue an expression.
///
/// Binary operators, calls and index expressions.
pub mod infix;

/// Shared helpers: precedence levels, operator mapping and comma-separated
/// lists.
pub mod utils;

pub use self::core::{Parser, parse};
