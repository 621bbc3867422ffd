use std::rc::Rc;

use crate::{
    ast::{Expr, Modify},
    interpreter::{
        evaluator::{
            core::{Flow, eval_expression},
            utils::check_arity,
        },
        object::{Environment, Object},
    },
};

/// Evaluates `quote(<expr>)`.
///
/// The argument is not evaluated. Every `unquote(<inner>)` call inside it is
/// evaluated in `env` and its result is spliced back as syntax, then the
/// rewritten tree is returned as a `Quote` object.
///
/// # Errors
/// `WrongArgumentCount` unless exactly one argument is given, and any error
/// raised while evaluating an `unquote` argument.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     evaluator::evaluate,
///     object::Environment,
///     parser::parse,
/// };
///
/// let (program, _) = parse("let x = 4; quote(8 + unquote(x + x))");
///
/// assert_eq!(evaluate(&program, &Environment::new()).to_string(), "QUOTE((8 + 8))");
/// ```
pub fn quote(arguments: &[Expr], env: &Environment) -> Flow<Object> {
    check_arity(arguments, 1)?;

    let node = eval_unquote_calls(arguments[0].clone(), env)?;
    Ok(Object::Quote(Rc::new(node)))
}

fn eval_unquote_calls(quoted: Expr, env: &Environment) -> Flow<Expr> {
    quoted.try_modify(&mut |node| -> Flow<Expr> {
              let Some(argument) = unquote_argument(&node) else {
                  return Ok(node);
              };

              let value = eval_expression(argument, env)?;
              Ok(object_to_node(value).unwrap_or(node))
          })
}

/// The argument of an `unquote(<arg>)` call with exactly one argument.
fn unquote_argument(node: &Expr) -> Option<&Expr> {
    match node {
        Expr::Call { function, arguments } if arguments.len() == 1 => match function.as_ref() {
            Expr::Identifier(ident) if ident.name == "unquote" => arguments.first(),
            _ => None,
        },
        _ => None,
    }
}

/// Converts an evaluated value back into syntax.
///
/// Numbers, booleans and strings become literals and a quote gives back the
/// tree it holds. Other values have no literal form.
fn object_to_node(value: Object) -> Option<Expr> {
    match value {
        Object::Integer(n) => Some(Expr::integer(n)),
        Object::Float(x) => Some(Expr::float(x)),
        Object::Boolean(b) => Some(Expr::Boolean(b)),
        Object::String(s) => Some(Expr::StringLiteral(s.to_string())),
        Object::Quote(node) => Some(Rc::unwrap_or_clone(node)),
        _ => None,
    }
}
