use std::{collections::BTreeMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, eval_expression},
        object::{Environment, HashPair, Object},
    },
    util::num::checked_index,
};

/// Evaluates `left[index]`.
///
/// Arrays take integer indices; an index outside the array, negative ones
/// included, yields `nil`. Hashes take any hashable key and yield `nil` for a
/// missing one.
///
/// # Errors
/// - `UnusableHashKey` when indexing a hash with an unhashable value.
/// - `IndexNotSupported` for every other combination.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::index::eval_index, object::Object};
///
/// let array = Object::from(vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)]);
///
/// assert_eq!(eval_index(&array, &Object::Integer(2)).unwrap(), Object::Integer(3));
/// assert_eq!(eval_index(&array, &Object::Integer(3)).unwrap(), Object::Nil);
/// assert_eq!(eval_index(&array, &Object::Integer(-1)).unwrap(), Object::Nil);
/// ```
pub fn eval_index(left: &Object, index: &Object) -> EvalResult<Object> {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => {
            Ok(checked_index(*i, elements.len()).map_or(Object::Nil, |i| elements[i].clone()))
        },
        (Object::Hash(pairs), _) => {
            let key = index.hash_key()?;
            Ok(pairs.get(&key)
                    .map_or(Object::Nil, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: left.kind() }),
    }
}

/// Builds a hash object from the pairs of a hash literal.
///
/// Each key is evaluated and checked for hashability before its value is
/// evaluated. A later pair with an equal key replaces an earlier one.
///
/// # Example
/// ```
/// use monkey::{
///     ast::Expr,
///     interpreter::{evaluator::index::eval_hash_literal, object::{Environment, Object}},
/// };
///
/// let pairs = [(Expr::integer(1), Expr::integer(2)), (Expr::integer(1), Expr::integer(3))];
/// let hash = eval_hash_literal(&pairs, &Environment::new()).unwrap();
///
/// assert_eq!(hash.to_string(), "{1: 3}");
/// ```
pub fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Environment) -> Flow<Object> {
    let mut hash = BTreeMap::new();

    for (key_node, value_node) in pairs {
        let key = eval_expression(key_node, env)?;
        let hash_key = key.hash_key()?;
        let value = eval_expression(value_node, env)?;

        hash.insert(hash_key, HashPair { key, value });
    }

    Ok(Object::Hash(Rc::new(hash)))
}
