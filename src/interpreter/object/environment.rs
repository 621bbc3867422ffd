use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::object::Object;

/// A lexical scope with an optional link to its enclosing scope.
///
/// Cloning an `Environment` clones the handle, not the scope: every clone and
/// every closure that captured it observe the same bindings.
///
/// # Example
/// ```
/// use monkey::interpreter::object::{Environment, Object};
///
/// let global = Environment::new();
/// global.set("x", Object::Integer(1));
///
/// let local = Environment::new_enclosed(&global);
/// local.set("x", Object::Integer(2));
///
/// assert_eq!(local.get("x"), Some(Object::Integer(2)));
/// assert_eq!(global.get("x"), Some(Object::Integer(1)));
///
/// // Bindings added to an outer scope later are visible from inside.
/// global.set("y", Object::Integer(3));
/// assert_eq!(local.get("y"), Some(Object::Integer(3)));
/// ```
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

#[derive(Default)]
struct Scope {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

impl Environment {
    /// Creates an empty top-level scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose lookups fall back to `outer`.
    #[must_use]
    pub fn new_enclosed(outer: &Self) -> Self {
        Self(Rc::new(RefCell::new(Scope { store: HashMap::new(),
                                          outer: Some(outer.clone()), })))
    }

    /// Looks `name` up in this scope, then along the chain of outer scopes.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.0.borrow();

        match scope.store.get(name) {
            Some(value) => Some(value.clone()),
            None => scope.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` in this scope, shadowing any outer binding, and returns
    /// the bound value.
    pub fn set(&self, name: impl Into<String>, value: Object) -> Object {
        self.0.borrow_mut().store.insert(name.into(), value.clone());
        value
    }

    /// Returns `true` if both handles refer to the same scope.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Lists the bound names only. Scopes are reachable from the closures they
/// contain, so printing values could recurse forever.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&String> = scope.store.keys().collect();
        names.sort();

        f.debug_struct("Environment")
         .field("names", &names)
         .field("enclosed", &scope.outer.is_some())
         .finish()
    }
}
