use crate::interpreter::{evaluator::core::EvalResult, object::Object};

/// Prints each argument on its own line and returns `nil`.
///
/// Arguments are formatted with their `Display` rendering, so strings print
/// without quotes.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::print::puts, object::Object};
///
/// // The function prints to stdout, but the doctest only checks the result.
/// let result = puts(&[Object::from("hello"), Object::Integer(42)]).unwrap();
///
/// assert_eq!(result, Object::Nil);
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn puts(args: &[Object]) -> EvalResult<Object> {
    for arg in args {
        println!("{arg}");
    }

    Ok(Object::Nil)
}
