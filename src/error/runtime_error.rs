use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::object::ObjectType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The rendered messages are what programs observe inside `Error` objects.
pub enum RuntimeError {
    /// An infix operator was applied to operands of unrelated types.
    TypeMismatch {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// A prefix operator is not defined for the operand's type.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type of the operand.
        operand:  ObjectType,
    },
    /// An infix operator is not defined for the operand types.
    UnknownInfixOperator {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// A name is bound neither in scope nor as a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A value of this type cannot be a hash key.
    UnusableHashKey {
        /// Type of the rejected key.
        kind: ObjectType,
    },
    /// The callee of a call is not callable.
    NotAFunction {
        /// Type of the callee.
        kind: ObjectType,
    },
    /// The indexed value does not support indexing.
    IndexNotSupported {
        /// Type of the indexed value.
        kind: ObjectType,
    },
    /// A function or builtin received the wrong number of arguments.
    WrongArgumentCount {
        /// Number of arguments accepted.
        expected: usize,
        /// Number of arguments received.
        got:      usize,
    },
    /// A builtin received an argument of a type it cannot handle.
    UnsupportedArgument {
        /// Name of the builtin.
        function: &'static str,
        /// Type of the argument.
        kind:     ObjectType,
    },
    /// A builtin that only works on arrays received something else.
    ArgumentNotArray {
        /// Name of the builtin.
        function: &'static str,
        /// Type of the argument.
        kind:     ObjectType,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// An expression the parser failed to read reached evaluation.
    MissingExpression,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => write!(f, "type mismatch: {left} {operator} {right}"),
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::UnusableHashKey { kind } => write!(f, "unusable as hash key: {kind}"),
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::WrongArgumentCount { expected, got } => {
                write!(f, "wrong number of arguments. want={expected}, got={got}")
            },
            Self::UnsupportedArgument { function, kind } => {
                write!(f, "argument to `{function}` not supported, got {kind}")
            },
            Self::ArgumentNotArray { function, kind } => {
                write!(f, "argument to `{function}` must be Array, got {kind}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::MissingExpression => write!(f, "missing expression"),
        }
    }
}

impl std::error::Error for RuntimeError {}
