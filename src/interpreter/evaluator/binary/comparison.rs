use std::rc::Rc;

use crate::interpreter::object::Object;

/// The equality used by `==` and `!=` outside of numbers and strings.
///
/// Booleans and `nil` compare by value. Arrays, hashes, closures, macros and
/// quotes compare by identity: two literals with the same contents are
/// different values, while two names bound to the same value are equal.
/// Values of different types are never equal.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::binary::comparison::is_identical, object::Object};
///
/// let array = Object::from(vec![Object::Integer(1)]);
///
/// assert!(is_identical(&array, &array.clone()));
/// assert!(!is_identical(&array, &Object::from(vec![Object::Integer(1)])));
/// assert!(is_identical(&Object::Nil, &Object::Nil));
/// assert!(!is_identical(&Object::Boolean(false), &Object::Nil));
/// ```
#[must_use]
pub fn is_identical(left: &Object, right: &Object) -> bool {
    match (left, right) {
        (Object::Boolean(a), Object::Boolean(b)) => a == b,
        (Object::Nil, Object::Nil) => true,
        (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b),
        (Object::Hash(a), Object::Hash(b)) => Rc::ptr_eq(a, b),
        (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
        (Object::Macro(a), Object::Macro(b)) => Rc::ptr_eq(a, b),
        (Object::Quote(a), Object::Quote(b)) => Rc::ptr_eq(a, b),
        (Object::Builtin(a), Object::Builtin(b)) => std::ptr::eq(*a, *b),
        _ => false,
    }
}
