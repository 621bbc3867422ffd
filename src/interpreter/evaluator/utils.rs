use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Checks that an argument list has exactly the expected length.
///
/// ## Example
/// ```
/// use monkey::interpreter::{evaluator::utils::check_arity, object::Object};
///
/// let args = vec![Object::Integer(2), Object::Integer(1)];
///
/// assert!(check_arity(&args, 2).is_ok());
/// assert_eq!(check_arity(&args, 1).unwrap_err().to_string(),
///            "wrong number of arguments. want=1, got=2");
/// ```
pub const fn check_arity<T>(args: &[T], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { expected,
                                               got: args.len() })
    }
}
