use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::Object},
};

/// Evaluates a prefix operator applied to an already evaluated operand.
///
/// - `!` negates truthiness and is defined for every value.
/// - `-` negates integers (wrapping) and floats.
///
/// # Example
/// ```
/// use monkey::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, object::Object},
/// };
///
/// let v = eval_prefix(PrefixOperator::Bang, &Object::Integer(5)).unwrap();
/// assert_eq!(v, Object::Boolean(false));
///
/// let v = eval_prefix(PrefixOperator::Minus, &Object::Float(1.5)).unwrap();
/// assert_eq!(v, Object::Float(-1.5));
///
/// let err = eval_prefix(PrefixOperator::Minus, &Object::Boolean(true)).unwrap_err();
/// assert_eq!(err.to_string(), "unknown operator: -Boolean");
/// ```
pub fn eval_prefix(operator: PrefixOperator, right: &Object) -> EvalResult<Object> {
    match operator {
        PrefixOperator::Bang => Ok(Object::Boolean(!right.is_truthy())),
        PrefixOperator::Minus => match right {
            Object::Integer(n) => Ok(Object::Integer(n.wrapping_neg())),
            Object::Float(x) => Ok(Object::Float(-x)),
            _ => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                           operand: right.kind() }),
        },
    }
}
