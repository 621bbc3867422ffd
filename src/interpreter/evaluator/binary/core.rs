use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                comparison::is_identical,
                scalar::{eval_float_infix, eval_integer_infix},
            },
            core::EvalResult,
        },
        object::Object,
    },
    util::num::i64_to_f64,
};

/// Evaluates an infix operation between two evaluated operands.
///
/// Two integers use integer arithmetic; an integer and a float, or two
/// floats, use float arithmetic. Two strings support only `+`. Any other pair
/// supports only `==` and `!=`, which compare identity. The remaining
/// combinations are a type mismatch when the types differ and an unknown
/// operator when they agree.
///
/// # Example
/// ```
/// use monkey::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::eval_infix, object::Object},
/// };
///
/// let v = eval_infix(InfixOperator::Plus, &Object::Integer(5), &Object::Float(5.1)).unwrap();
/// assert_eq!(v, Object::Float(10.1));
///
/// let v = eval_infix(InfixOperator::Plus, &Object::from("Hello"), &Object::from(" World!"));
/// assert_eq!(v.unwrap(), Object::from("Hello World!"));
///
/// let err = eval_infix(InfixOperator::Plus, &Object::Integer(5), &Object::Boolean(true));
/// assert_eq!(err.unwrap_err().to_string(), "type mismatch: Integer + Boolean");
/// ```
pub fn eval_infix(operator: InfixOperator, left: &Object, right: &Object) -> EvalResult<Object> {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_integer_infix(operator, *a, *b),
        (Object::Integer(_) | Object::Float(_), Object::Integer(_) | Object::Float(_)) => {
            Ok(eval_float_infix(operator, as_float(left), as_float(right)))
        },
        (Object::String(a), Object::String(b)) => match operator {
            InfixOperator::Plus => Ok(Object::from(format!("{a}{b}"))),
            _ => Err(unknown_operator(operator, left, right)),
        },
        _ => match operator {
            InfixOperator::Eq => Ok(Object::Boolean(is_identical(left, right))),
            InfixOperator::NotEq => Ok(Object::Boolean(!is_identical(left, right))),
            _ if left.kind() != right.kind() => {
                Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                 operator,
                                                 right: right.kind() })
            },
            _ => Err(unknown_operator(operator, left, right)),
        },
    }
}

/// The numeric value of an integer or float operand.
const fn as_float(value: &Object) -> f64 {
    match value {
        Object::Integer(n) => i64_to_f64(*n),
        Object::Float(x) => *x,
        _ => f64::NAN,
    }
}

fn unknown_operator(operator: InfixOperator, left: &Object, right: &Object) -> RuntimeError {
    RuntimeError::UnknownInfixOperator { left: left.kind(),
                                         operator,
                                         right: right.kind() }
}
