/// The evaluator module executes programs and computes results.
///
/// The evaluator walks the syntax tree, applies operators, calls closures and
/// builtins, and produces `Object` values. Evaluation errors surface as
/// `Error` objects.
///
/// # Responsibilities
/// - Evaluates every node type of the syntax tree.
/// - Creates closures over shared scopes and applies them.
/// - Implements the `quote` special form used by macros.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces tokens for identifiers,
/// literals, operators, delimiters and keywords. This is the first stage of
/// interpretation.
pub mod lexer;
/// The macro expander applies user-defined macros to a parsed program.
///
/// It runs between parsing and evaluation: macro definitions are collected
/// and removed, then every macro call is replaced by the syntax the macro
/// produces.
pub mod macro_expander;
/// The object module defines runtime values and scopes.
pub mod object;
/// The parser module builds the syntax tree from tokens.
///
/// A Pratt parser with prefix and infix handlers per token kind. Errors are
/// collected rather than raised, so one parse reports every problem it finds.
pub mod parser;
