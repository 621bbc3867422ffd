/// Array and string builtins: `len`, `first`, `last`, `rest` and `push`.
pub mod builtin;
/// Function application and the builtin table.
pub mod core;
/// The `puts` builtin.
///
/// Writes the rendering of each argument to standard output.
pub mod print;

pub use self::core::{Arity, BUILTIN_FUNCTIONS, Builtin, apply_function, lookup_builtin};
