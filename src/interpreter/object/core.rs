use std::{collections::BTreeMap, fmt, rc::Rc};

use crate::{
    ast::{Block, Expr, Identifier},
    interpreter::{
        evaluator::function::Builtin,
        object::{Environment, HashKey},
    },
};

/// A runtime value.
///
/// Compound values share their storage through `Rc`, so cloning an object is
/// cheap and never copies array or hash contents. Nothing mutates that storage
/// after construction: `push` and `rest` build new arrays.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// An immutable string.
    String(Rc<str>),
    /// The absence of a value.
    Nil,
    /// An evaluation error, as seen by the program and the host.
    Error(String),
    /// A closure.
    Function(Rc<Function>),
    /// A native function from the builtin table.
    Builtin(&'static Builtin),
    /// An ordered list of values.
    Array(Rc<Vec<Self>>),
    /// Key/value pairs addressed by the key's `HashKey`.
    Hash(Rc<BTreeMap<HashKey, HashPair>>),
    /// An unevaluated syntax tree produced by `quote`.
    Quote(Rc<Expr>),
    /// A macro registered by the macro definition pass.
    Macro(Rc<Macro>),
}

/// A user-defined function together with the scope it was created in.
#[derive(Debug)]
pub struct Function {
    /// Parameter names in order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       Block,
    /// The captured scope, shared with the creator.
    pub env:        Environment,
}

/// A macro: same shape as a function, but applied to syntax before
/// evaluation.
#[derive(Debug)]
pub struct Macro {
    /// Parameter names in order.
    pub parameters: Vec<Identifier>,
    /// The macro body.
    pub body:       Block,
    /// The scope the macro was defined in.
    pub env:        Environment,
}

/// A hash entry. The original key is kept so the hash can be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written by the program.
    pub key:   Object,
    /// The associated value.
    pub value: Object,
}

/// The type of an object, as named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    /// `Integer`
    Integer,
    /// `Float`
    Float,
    /// `Boolean`
    Boolean,
    /// `String`
    String,
    /// `Nil`
    Nil,
    /// `Error`
    Error,
    /// `Function`
    Function,
    /// `Builtin`
    Builtin,
    /// `Array`
    Array,
    /// `Hash`
    Hash,
    /// `Quote`
    Quote,
    /// `Macro`
    Macro,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Object {
    /// The type tag of this object.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::{Object, ObjectType};
    ///
    /// assert_eq!(Object::Integer(1).kind(), ObjectType::Integer);
    /// assert_eq!(Object::Nil.kind().to_string(), "Nil");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Float(_) => ObjectType::Float,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::String(_) => ObjectType::String,
            Self::Nil => ObjectType::Nil,
            Self::Error(_) => ObjectType::Error,
            Self::Function(_) => ObjectType::Function,
            Self::Builtin(_) => ObjectType::Builtin,
            Self::Array(_) => ObjectType::Array,
            Self::Hash(_) => ObjectType::Hash,
            Self::Quote(_) => ObjectType::Quote,
            Self::Macro(_) => ObjectType::Macro,
        }
    }

    /// Everything except `nil` and `false` is truthy.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::Object;
    ///
    /// assert!(Object::Integer(0).is_truthy());
    /// assert!(!Object::Nil.is_truthy());
    /// assert!(!Object::Boolean(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }

    /// Returns `true` for `Error` objects.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl PartialEq for Object {
    /// Structural equality, used by tests and host code.
    ///
    /// Closures and macros compare by identity, builtins by name. This is not
    /// the language's `==`, which compares arrays and hashes by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Quote(a), Self::Quote(b)) => a == b,
            (Self::Macro(a), Self::Macro(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<Vec<Self>> for Object {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl From<Expr> for Object {
    fn from(value: Expr) -> Self {
        Self::Quote(Rc::new(value))
    }
}

fn write_parameters(f: &mut fmt::Formatter<'_>, parameters: &[Identifier]) -> fmt::Result {
    for (index, param) in parameters.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{param}")?;
    }
    Ok(())
}

/// The `Inspect` rendering of an object: what the REPL prints.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
            Self::Nil => f.write_str("nil"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
            Self::Function(function) => {
                f.write_str("fn(")?;
                write_parameters(f, &function.parameters)?;
                write!(f, ") {{\n{}\n}}", function.body)
            },
            Self::Builtin(_) => f.write_str("builtin function"),
            Self::Array(elements) => {
                f.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            },
            Self::Hash(pairs) => {
                f.write_str("{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            },
            Self::Quote(node) => write!(f, "QUOTE({node})"),
            Self::Macro(mac) => {
                f.write_str("macro(")?;
                write_parameters(f, &mac.parameters)?;
                write!(f, ") {{\n{}\n}}", mac.body)
            },
        }
    }
}
