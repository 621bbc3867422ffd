/// Errors found while parsing.
///
/// Parse errors never stop the parser. They are collected in order and a
/// program with any of them is never evaluated.
pub mod parse_error;
/// Errors raised while evaluating.
///
/// These travel through the evaluator as `Err` values and surface to programs
/// as first-class `Error` objects.
pub mod runtime_error;
/// Fatal errors of macro expansion.
pub mod macro_error;

pub use macro_error::MacroError;
pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
