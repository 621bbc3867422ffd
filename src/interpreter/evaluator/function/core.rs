use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Unwind, eval_block},
            function::{builtin, print},
            utils::check_arity,
        },
        object::{Environment, Function, Object},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments and returns a new value. It
/// must not mutate the storage of its arguments.
type BuiltinFn = fn(&[Object]) -> EvalResult<Object>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` means the builtin accepts any number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Any,
}

/// A native function available to every program.
pub struct Builtin {
    /// The name programs call it by.
    pub name:  &'static str,
    /// How many arguments it accepts.
    pub arity: Arity,
    func:      BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "rest"  => { arity: Arity::Exact(1), func: builtin::rest },
    "push"  => { arity: Arity::Exact(2), func: builtin::push },
    "puts"  => { arity: Arity::Any, func: print::puts },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    fn check<T>(self, args: &[T]) -> EvalResult<()> {
        match self {
            Self::Exact(expected) => check_arity(args, expected),
            Self::Any => Ok(()),
        }
    }
}

impl Builtin {
    /// Calls the builtin after checking the argument count.
    pub fn call(&self, args: &[Object]) -> EvalResult<Object> {
        self.arity.check(args)?;
        (self.func)(args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Finds a builtin by name.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::lookup_builtin, object::Object};
///
/// let len = lookup_builtin("len").unwrap();
///
/// assert_eq!(len.call(&[Object::from("four")]).unwrap(), Object::Integer(4));
/// assert!(lookup_builtin("printf").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Applies a callable object to evaluated arguments.
///
/// A closure runs in a new scope enclosing the scope it captured, with its
/// parameters bound positionally; a `return` inside it stops at this call. A
/// builtin is invoked directly.
///
/// # Errors
/// - `WrongArgumentCount` when the argument count does not match.
/// - `NotAFunction` when `function` is not callable.
/// - Any error raised by the body.
pub fn apply_function(function: &Object, arguments: Vec<Object>) -> EvalResult<Object> {
    match function {
        Object::Function(function) => call_closure(function, arguments),
        Object::Builtin(builtin) => builtin.call(&arguments),
        other => Err(RuntimeError::NotAFunction { kind: other.kind() }),
    }
}

fn call_closure(function: &Function, arguments: Vec<Object>) -> EvalResult<Object> {
    check_arity(&arguments, function.parameters.len())?;

    let env = Environment::new_enclosed(&function.env);
    for (param, argument) in function.parameters.iter().zip(arguments) {
        env.set(param.name.as_str(), argument);
    }

    eval_block(&function.body, &env).or_else(Unwind::into_result)
}
