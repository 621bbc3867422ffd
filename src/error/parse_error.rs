use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every problem the parser can report.
pub enum ParseError {
    /// The next token was not the one the grammar requires.
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
    },
    /// No expression can start with this token.
    NoPrefixParseFunction {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// An integer literal did not fit into 64 bits.
    InvalidInteger {
        /// The literal text.
        literal: String,
    },
    /// A float literal could not be read.
    InvalidFloat {
        /// The literal text.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFunction { kind } => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::InvalidInteger { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            },
            Self::InvalidFloat { literal } => write!(f, "could not parse {literal:?} as float"),
        }
    }
}

impl std::error::Error for ParseError {}

/// All errors of one parse, reported together, one per line.
///
/// # Example
/// ```
/// use monkey::{error::ParseErrors, interpreter::parser::parse};
///
/// let (_, errors) = parse("let x 5; if x");
/// let report = ParseErrors(errors).to_string();
///
/// assert_eq!(report,
///            "expected next token to be =, got INT instead\n\
///             expected next token to be (, got IDENT instead");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
