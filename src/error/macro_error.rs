use crate::{error::RuntimeError, interpreter::object::ObjectType};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the faults that abort macro expansion.
///
/// A macro call site can only be replaced by a syntax tree, so a macro that
/// produces anything else leaves the program without a meaning. None of these
/// are recoverable by the program being expanded.
pub enum MacroError {
    /// The macro body evaluated to something other than a quote.
    NotQuote {
        /// Name of the macro.
        name: String,
        /// Type of the value the body produced.
        kind: ObjectType,
    },
    /// Evaluating the macro body raised an error.
    Failed {
        /// Name of the macro.
        name:  String,
        /// The error raised by the body.
        error: RuntimeError,
    },
    /// The macro was called with the wrong number of arguments.
    WrongArgumentCount {
        /// Name of the macro.
        name:     String,
        /// Number of parameters the macro declares.
        expected: usize,
        /// Number of arguments at the call site.
        got:      usize,
    },
}

impl std::fmt::Display for MacroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotQuote { name, kind } => {
                write!(f, "macro `{name}` must return a Quote, got {kind}")
            },
            Self::Failed { name, error } => write!(f, "macro `{name}` failed: {error}"),
            Self::WrongArgumentCount { name,
                                       expected,
                                       got, } => write!(f,
                                                        "macro `{name}` takes {expected} arguments, got {got}"),
        }
    }
}

impl std::error::Error for MacroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}
