use std::hash::{DefaultHasher, Hash, Hasher};

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::object::{Object, ObjectType},
};

/// Identifies a hash entry by the type and content of its key.
///
/// Two keys of the same type and equal content always produce the same
/// `HashKey`. Keys of different types never compare equal, so `1` and `1.0`
/// address different entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashKey {
    /// The type of the key object.
    pub kind:  ObjectType,
    /// A 64-bit digest of the key's content.
    pub value: u64,
}

/// Digests any hashable content into 64 bits.
///
/// The default hasher is seeded with fixed keys, so digests are stable for
/// the whole process.
fn digest<T: Hash + ?Sized>(content: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}

impl Object {
    /// Derives the hash key of a value.
    ///
    /// Only integers, floats, strings and booleans are hashable. Integers use
    /// their two's complement bits, booleans `0` and `1`, and strings and
    /// floats a digest of their content.
    ///
    /// # Errors
    /// `RuntimeError::UnusableHashKey` for every other type.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::Object;
    ///
    /// let hello1 = Object::from("Hello World");
    /// let hello2 = Object::from("Hello World");
    /// let diff = Object::from("My name is johnny");
    ///
    /// assert_eq!(hello1.hash_key().unwrap(), hello2.hash_key().unwrap());
    /// assert_ne!(hello1.hash_key().unwrap(), diff.hash_key().unwrap());
    /// assert!(Object::from(vec![Object::Integer(1)]).hash_key().is_err());
    /// ```
    pub fn hash_key(&self) -> Result<HashKey, RuntimeError> {
        let value = match self {
            Self::Integer(n) => u64::from_ne_bytes(n.to_ne_bytes()),
            Self::Boolean(b) => u64::from(*b),
            Self::String(s) => digest(&**s),
            Self::Float(x) => digest(&OrderedFloat(*x)),
            _ => return Err(RuntimeError::UnusableHashKey { kind: self.kind() }),
        };

        Ok(HashKey { kind: self.kind(),
                     value })
    }
}
