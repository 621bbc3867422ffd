/// Runtime values and their textual rendering.
///
/// Defines the `Object` enum produced by evaluation, the closures and macros
/// it carries, and the `ObjectType` tags used in error messages.
pub mod core;
/// Chained lexical scopes shared between closures.
pub mod environment;
/// Content-derived keys for hash objects.
pub mod hash_key;

pub use self::{
    core::{Function, HashPair, Macro, Object, ObjectType},
    environment::Environment,
    hash_key::HashKey,
};
