use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::Object},
};

/// Evaluates an infix operation on two integers.
///
/// Arithmetic wraps around on overflow and division truncates toward zero.
/// Comparisons produce booleans.
///
/// # Errors
/// `DivisionByZero` when dividing by zero.
///
/// # Example
/// ```
/// use monkey::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::scalar::eval_integer_infix, object::Object},
/// };
///
/// assert_eq!(eval_integer_infix(InfixOperator::Slash, 7, 2).unwrap(), Object::Integer(3));
/// assert_eq!(eval_integer_infix(InfixOperator::Slash, -7, 2).unwrap(), Object::Integer(-3));
/// assert_eq!(eval_integer_infix(InfixOperator::Lt, 1, 2).unwrap(), Object::Boolean(true));
/// assert!(eval_integer_infix(InfixOperator::Slash, 1, 0).is_err());
/// ```
pub fn eval_integer_infix(operator: InfixOperator, a: i64, b: i64) -> EvalResult<Object> {
    use InfixOperator::{Asterisk, Eq, Gt, Lt, Minus, NotEq, Plus, Slash};

    Ok(match operator {
           Plus => Object::Integer(a.wrapping_add(b)),
           Minus => Object::Integer(a.wrapping_sub(b)),
           Asterisk => Object::Integer(a.wrapping_mul(b)),
           Slash => {
               if b == 0 {
                   return Err(RuntimeError::DivisionByZero);
               }
               Object::Integer(a.wrapping_div(b))
           },
           Lt => Object::Boolean(a < b),
           Gt => Object::Boolean(a > b),
           Eq => Object::Boolean(a == b),
           NotEq => Object::Boolean(a != b),
       })
}

/// Evaluates an infix operation on two floats.
///
/// Division follows IEEE 754, so dividing by zero yields an infinity or NaN.
///
/// # Example
/// ```
/// use monkey::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::scalar::eval_float_infix, object::Object},
/// };
///
/// assert_eq!(eval_float_infix(InfixOperator::Asterisk, 1.5, 2.0), Object::Float(3.0));
/// assert_eq!(eval_float_infix(InfixOperator::Eq, 2.0, 2.0), Object::Boolean(true));
/// ```
#[allow(clippy::float_cmp)]
#[must_use]
pub fn eval_float_infix(operator: InfixOperator, a: f64, b: f64) -> Object {
    use InfixOperator::{Asterisk, Eq, Gt, Lt, Minus, NotEq, Plus, Slash};

    match operator {
        Plus => Object::Float(a + b),
        Minus => Object::Float(a - b),
        Asterisk => Object::Float(a * b),
        Slash => Object::Float(a / b),
        Lt => Object::Boolean(a < b),
        Gt => Object::Boolean(a > b),
        Eq => Object::Boolean(a == b),
        NotEq => Object::Boolean(a != b),
    }
}
