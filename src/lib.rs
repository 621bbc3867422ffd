//! # monkey
//!
//! monkey is an interpreter for a small dynamically typed language with
//! first-class functions, closures, arrays, hashes and syntactic macros.
//! Source text goes through a lexer and a Pratt parser, macro definitions are
//! collected and expanded, and the resulting program is evaluated by a
//! tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::error::Error;

use crate::{
    error::ParseErrors,
    interpreter::{
        evaluator::evaluate,
        macro_expander::{define_macros, expand_macros},
        object::{Environment, Object},
        parser::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// programs as trees, their textual rendering, and the `Modify` rewrite used
/// by macros.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Renders nodes back to source-like text.
/// - Provides the single structural rewrite over every node type.
pub mod ast;
/// Provides error types for parsing, evaluation and macro expansion.
///
/// # Responsibilities
/// - Defines one error enum per failure tier.
/// - Renders the exact messages programs and users observe.
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, macro expansion and evaluation,
/// along with the runtime value model.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, macro expander,
///   evaluator and objects.
/// - Provides entry points for each phase.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// A persistent interpreter session.
///
/// Bindings and macros defined by one call of [`Interpreter::run`] remain
/// visible to later calls, which is what the REPL relies on.
///
/// # Example
/// ```
/// use monkey::{Interpreter, interpreter::object::Object};
///
/// let mut interpreter = Interpreter::new();
///
/// interpreter.run("let unless = macro(cond, then) { quote(if (!(unquote(cond))) { unquote(then) }) };")
///            .unwrap();
/// interpreter.run("let x = 10;").unwrap();
///
/// assert_eq!(interpreter.run("unless(x > 20, x * 2)").unwrap(), Object::Integer(20));
/// assert_eq!(interpreter.run("unless(x < 20, x * 2)").unwrap(), Object::Nil);
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    env:       Environment,
    macro_env: Environment,
}

impl Interpreter {
    /// Creates a session with empty global and macro scopes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses, expands and evaluates one source text.
    ///
    /// # Returns
    /// The value of the program. Evaluation errors are returned as an
    /// `Object::Error` value rather than as `Err`.
    ///
    /// # Errors
    /// `ParseErrors` if the source does not parse, in which case nothing is
    /// evaluated, or a `MacroError` if expansion fails.
    pub fn run(&mut self, source: &str) -> Result<Object, Box<dyn Error>> {
        let (mut program, errors) = parse(source);
        if !errors.is_empty() {
            return Err(Box::new(ParseErrors(errors)));
        }

        define_macros(&mut program, &self.macro_env);
        let program = expand_macros(program, &self.macro_env)?;

        Ok(evaluate(&program, &self.env))
    }

    /// The global scope of the session.
    #[must_use]
    pub const fn env(&self) -> &Environment {
        &self.env
    }
}

/// Runs a source text in a fresh session and returns its value.
///
/// Unlike [`Interpreter::run`], an evaluation error is reported as `Err` too,
/// so callers can treat every failure alike.
///
/// # Errors
/// Returns an error if parsing, macro expansion or evaluation fails.
///
/// # Examples
/// ```
/// use monkey::{get_result, interpreter::object::Object};
///
/// // Simple expression: the result is computed and no error occurs.
/// let res = get_result("let result = 2 + 2; result");
/// assert_eq!(res.unwrap(), Object::Integer(4));
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("let y = x + 1"); // 'x' is not defined
/// assert_eq!(res.unwrap_err().to_string(), "identifier not found: x");
/// ```
pub fn get_result(source: &str) -> Result<Object, Box<dyn Error>> {
    match Interpreter::new().run(source)? {
        Object::Error(message) => Err(message.into()),
        value => Ok(value),
    }
}
