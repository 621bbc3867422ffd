use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        object::Object,
    },
    util::num::usize_to_i64,
};

/// Returns the single array argument of `function`.
fn array_argument(function: &'static str, args: &[Object]) -> EvalResult<Rc<Vec<Object>>> {
    match &args[0] {
        Object::Array(elements) => Ok(Rc::clone(elements)),
        other => Err(RuntimeError::ArgumentNotArray { function,
                                                      kind: other.kind() }),
    }
}

/// The length of a string in bytes, or of an array in elements.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::len, object::Object};
///
/// assert_eq!(len(&[Object::from("hello world")]).unwrap(), Object::Integer(11));
/// assert_eq!(len(&[Object::from("")]).unwrap(), Object::Integer(0));
/// assert_eq!(len(&[Object::Integer(1)]).unwrap_err().to_string(),
///            "argument to `len` not supported, got Integer");
/// ```
pub fn len(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    match &args[0] {
        Object::String(s) => Ok(Object::Integer(usize_to_i64(s.len()))),
        Object::Array(elements) => Ok(Object::Integer(usize_to_i64(elements.len()))),
        other => Err(RuntimeError::UnsupportedArgument { function: "len",
                                                         kind:     other.kind(), }),
    }
}

/// The first element of an array, or `nil` when it is empty.
pub fn first(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    let elements = array_argument("first", args)?;
    Ok(elements.first().cloned().unwrap_or(Object::Nil))
}

/// The last element of an array, or `nil` when it is empty.
pub fn last(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    let elements = array_argument("last", args)?;
    Ok(elements.last().cloned().unwrap_or(Object::Nil))
}

/// A new array holding every element but the first, or `nil` when the array
/// is empty.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::rest, object::Object};
///
/// let array = Object::from(vec![Object::Integer(1), Object::Integer(2)]);
///
/// assert_eq!(rest(&[array.clone()]).unwrap(), Object::from(vec![Object::Integer(2)]));
/// assert_eq!(array, Object::from(vec![Object::Integer(1), Object::Integer(2)]));
/// assert_eq!(rest(&[Object::from(Vec::<Object>::new())]).unwrap(), Object::Nil);
/// ```
pub fn rest(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    let elements = array_argument("rest", args)?;
    Ok(match elements.split_first() {
           Some((_, tail)) => Object::from(tail.to_vec()),
           None => Object::Nil,
       })
}

/// A new array with the second argument appended to the first.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::push, object::Object};
///
/// let array = Object::from(vec![Object::Integer(1)]);
/// let pushed = push(&[array.clone(), Object::Integer(2)]).unwrap();
///
/// assert_eq!(pushed, Object::from(vec![Object::Integer(1), Object::Integer(2)]));
/// assert_eq!(array, Object::from(vec![Object::Integer(1)]));
/// ```
pub fn push(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 2)?;

    let elements = array_argument("push", args)?;
    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend(elements.iter().cloned());
    pushed.push(args[1].clone());

    Ok(Object::from(pushed))
}
