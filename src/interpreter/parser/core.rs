use std::collections::HashMap;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::utils::{Precedence, precedence_of},
    },
};

/// Handler for a token that starts an expression. Returns `None` after
/// recording an error.
pub type PrefixParseFn<'src> = fn(&mut Parser<'src>) -> Option<Expr>;

/// Handler for a token that continues the expression on its left.
pub type InfixParseFn<'src> = fn(&mut Parser<'src>, Expr) -> Option<Expr>;

/// A Pratt parser over a token stream.
///
/// Errors never abort parsing. They are recorded in order and the malformed
/// expression is replaced by `Expr::Missing`; a program with errors must not
/// be evaluated.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::Parser};
///
/// let mut parser = Parser::new(Lexer::new("a + b * c + d / e - f"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "(((a + (b * c)) + (d / e)) - f)");
/// ```
pub struct Parser<'src> {
    lexer:              Lexer<'src>,
    pub(super) current: Token,
    pub(super) peek:    Token,
    errors:             Vec<ParseError>,
    prefix_fns:         HashMap<TokenKind, PrefixParseFn<'src>>,
    infix_fns:          HashMap<TokenKind, InfixParseFn<'src>>,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first two tokens.
    #[must_use]
    pub fn new(lexer: Lexer<'src>) -> Self {
        let mut prefix_fns: HashMap<TokenKind, PrefixParseFn<'src>> = HashMap::new();
        prefix_fns.insert(TokenKind::Ident, Self::parse_identifier);
        prefix_fns.insert(TokenKind::Int, Self::parse_integer_literal);
        prefix_fns.insert(TokenKind::Float, Self::parse_float_literal);
        prefix_fns.insert(TokenKind::Str, Self::parse_string_literal);
        prefix_fns.insert(TokenKind::True, Self::parse_boolean);
        prefix_fns.insert(TokenKind::False, Self::parse_boolean);
        prefix_fns.insert(TokenKind::Bang, Self::parse_prefix_expression);
        prefix_fns.insert(TokenKind::Minus, Self::parse_prefix_expression);
        prefix_fns.insert(TokenKind::LParen, Self::parse_grouped_expression);
        prefix_fns.insert(TokenKind::If, Self::parse_if_expression);
        prefix_fns.insert(TokenKind::Function, Self::parse_function_literal);
        prefix_fns.insert(TokenKind::Macro, Self::parse_macro_literal);
        prefix_fns.insert(TokenKind::LBracket, Self::parse_array_literal);
        prefix_fns.insert(TokenKind::LBrace, Self::parse_hash_literal);

        let mut infix_fns: HashMap<TokenKind, InfixParseFn<'src>> = HashMap::new();
        for kind in [TokenKind::Plus,
                     TokenKind::Minus,
                     TokenKind::Asterisk,
                     TokenKind::Slash,
                     TokenKind::Lt,
                     TokenKind::Gt,
                     TokenKind::Eq,
                     TokenKind::NotEq]
        {
            infix_fns.insert(kind, Self::parse_infix_expression);
        }
        infix_fns.insert(TokenKind::LParen, Self::parse_call_expression);
        infix_fns.insert(TokenKind::LBracket, Self::parse_index_expression);

        let mut parser = Self { lexer,
                                current: Token::eof(),
                                peek: Token::eof(),
                                errors: Vec::new(),
                                prefix_fns,
                                infix_fns };

        parser.next_token();
        parser.next_token();
        parser
    }

    /// The errors recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses statements until the end of input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The loop stops at a semicolon or at the first operator that does not
    /// bind tighter, which keeps equal-precedence operators left-associative.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Expr {
        let Some(prefix) = self.prefix_fns.get(&self.current.kind).copied() else {
            self.errors.push(ParseError::NoPrefixParseFunction { kind: self.current.kind });
            return Expr::Missing;
        };

        let mut left = prefix(self).unwrap_or(Expr::Missing);

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_fns.get(&self.peek.kind).copied() else {
                return left;
            };

            self.next_token();
            left = infix(self, left).unwrap_or(Expr::Missing);
        }

        left
    }

    pub(super) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(super) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the next token has the given kind; otherwise records an
    /// error and stays put.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.errors.push(ParseError::UnexpectedToken { expected: kind,
                                                           found:    self.peek.kind, });
            None
        }
    }

    pub(super) fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub(super) fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    pub(super) fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind)
    }
}

/// Parses a whole source text.
///
/// # Returns
/// The program and the errors found, in source order.
///
/// # Example
/// ```
/// use monkey::interpreter::parser::parse;
///
/// let (program, errors) = parse("let x = 1 * 2; x");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 * 2);x");
///
/// let (_, errors) = parse("let 5;");
/// assert_eq!(errors[0].to_string(), "expected next token to be IDENT, got INT instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}
