use std::fmt;

/// Structural rewriting of syntax trees.
///
/// The macro expander and `quote`/`unquote` both transform programs through
/// the single traversal defined here.
pub mod modify;

pub use modify::Modify;

/// A name as it appears in source: a variable, parameter or callee.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The root of a parsed source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// The literal of the first statement, or an empty string for an empty
    /// program.
    #[must_use]
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map_or_else(String::new, Statement::token_literal)
    }
}

/// A `{ ... }` sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements of the block in source order.
    pub statements: Vec<Statement>,
}

impl Block {
    /// Blocks always start with a left brace.
    #[must_use]
    pub const fn token_literal(&self) -> &'static str {
        "{"
    }
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The bound name.
        name:  Identifier,
        /// The bound expression.
        value: Expr,
    },
    /// `return <value>;`
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// An expression used as a statement; its value is the statement's value.
    Expression {
        /// The wrapped expression.
        expr: Expr,
    },
}

impl Statement {
    /// Returns the literal text of the token the statement starts with.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Let { .. } => "let".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression { expr } => expr.token_literal(),
        }
    }
}

/// An expression node.
///
/// Every construct that produces a value is an expression, including `if`,
/// function literals and macro literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A variable reference.
    Identifier(Identifier),
    /// An integer literal together with its source text.
    IntegerLiteral {
        /// The parsed value.
        value:   i64,
        /// The exact source text.
        literal: String,
    },
    /// A float literal together with its source text.
    FloatLiteral {
        /// The parsed value.
        value:   f64,
        /// The exact source text.
        literal: String,
    },
    /// `true` or `false`.
    Boolean(bool),
    /// A string literal, without the surrounding quotes.
    StringLiteral(String),
    /// `[a, b, c]`
    ArrayLiteral(Vec<Self>),
    /// `{k: v, ...}`. Pair order carries no meaning.
    HashLiteral(Vec<(Self, Self)>),
    /// `<op><right>`, for example `-x` or `!ok`.
    Prefix {
        /// The prefix operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// `<left> <op> <right>`
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The infix operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Evaluated when the condition is truthy.
        consequence: Block,
        /// Evaluated otherwise, when present.
        alternative: Option<Block>,
    },
    /// `fn(<parameters>) { <body> }`
    FunctionLiteral {
        /// Parameter names in order.
        parameters: Vec<Identifier>,
        /// The function body.
        body:       Block,
    },
    /// `macro(<parameters>) { <body> }`
    MacroLiteral {
        /// Parameter names in order.
        parameters: Vec<Identifier>,
        /// The macro body.
        body:       Block,
    },
    /// `<function>(<arguments>)`
    Call {
        /// The callee expression.
        function:  Box<Self>,
        /// Arguments in order.
        arguments: Vec<Self>,
    },
    /// `<left>[<index>]`
    Index {
        /// The indexed expression.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
    /// Stands in for an expression the parser could not read.
    Missing,
}

impl Expr {
    /// Shorthand for an identifier expression.
    ///
    /// # Example
    /// ```
    /// use monkey::ast::{Expr, Identifier};
    ///
    /// assert_eq!(Expr::ident("x"), Expr::Identifier(Identifier::new("x")));
    /// ```
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// An integer literal whose source text is the canonical rendering of
    /// `value`.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::IntegerLiteral { value,
                               literal: value.to_string() }
    }

    /// A float literal whose source text is the canonical rendering of
    /// `value`.
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::FloatLiteral { value,
                             literal: value.to_string() }
    }

    /// Shorthand for an infix expression.
    #[must_use]
    pub fn infix(left: Self, operator: InfixOperator, right: Self) -> Self {
        Self::Infix { left: Box::new(left),
                      operator,
                      right: Box::new(right) }
    }

    /// Returns the literal text of the token the expression was parsed from.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier(ident) => ident.name.clone(),
            Self::IntegerLiteral { literal, .. } | Self::FloatLiteral { literal, .. } => {
                literal.clone()
            },
            Self::Boolean(value) => value.to_string(),
            Self::StringLiteral(value) => value.clone(),
            Self::ArrayLiteral(_) | Self::Index { .. } => "[".to_string(),
            Self::HashLiteral(_) => "{".to_string(),
            Self::Prefix { operator, .. } => operator.to_string(),
            Self::Infix { operator, .. } => operator.to_string(),
            Self::If { .. } => "if".to_string(),
            Self::FunctionLiteral { .. } => "fn".to_string(),
            Self::MacroLiteral { .. } => "macro".to_string(),
            Self::Call { .. } => "(".to_string(),
            Self::Missing => String::new(),
        }
    }
}

/// Operators written before their operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!`).
    Bang,
    /// Arithmetic negation (`-`).
    Minus,
}

/// Operators written between their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation (`+`).
    Plus,
    /// Subtraction (`-`).
    Minus,
    /// Multiplication (`*`).
    Asterisk,
    /// Division (`/`).
    Slash,
    /// Less than (`<`).
    Lt,
    /// Greater than (`>`).
    Gt,
    /// Equality (`==`).
    Eq,
    /// Inequality (`!=`).
    NotEq,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Bang => "!",
                        Self::Minus => "-",
                    })
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Plus => "+",
                        Self::Minus => "-",
                        Self::Asterisk => "*",
                        Self::Slash => "/",
                        Self::Lt => "<",
                        Self::Gt => ">",
                        Self::Eq => "==",
                        Self::NotEq => "!=",
                    })
    }
}

/// Writes `items` separated by `", "`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::IntegerLiteral { literal, .. } | Self::FloatLiteral { literal, .. } => {
                f.write_str(literal)
            },
            Self::Boolean(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "\"{value}\""),
            Self::ArrayLiteral(elements) => {
                f.write_str("[")?;
                write_joined(f, elements)?;
                f.write_str("]")
            },
            Self::HashLiteral(pairs) => {
                f.write_str("{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if {condition} {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                f.write_str("fn(")?;
                write_joined(f, parameters)?;
                write!(f, ") {{ {body} }}")
            },
            Self::MacroLiteral { parameters, body } => {
                f.write_str("macro(")?;
                write_joined(f, parameters)?;
                write!(f, ") {{ {body} }}")
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments)?;
                f.write_str(")")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::Missing => Ok(()),
        }
    }
}
