use crate::{
    ast::{Expr, Identifier, InfixOperator, PrefixOperator},
    interpreter::{lexer::TokenKind, parser::Parser},
};

/// Binding strength of operators, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything binds tighter than this.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// `-x` and `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

/// The precedence a token has when it appears in infix position.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     lexer::TokenKind,
///     parser::utils::{Precedence, precedence_of},
/// };
///
/// assert_eq!(precedence_of(TokenKind::Asterisk), Precedence::Product);
/// assert!(precedence_of(TokenKind::LBracket) > precedence_of(TokenKind::LParen));
/// assert_eq!(precedence_of(TokenKind::Semicolon), Precedence::Lowest);
/// ```
#[must_use]
pub const fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        TokenKind::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

pub(super) const fn prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Bang => Some(PrefixOperator::Bang),
        TokenKind::Minus => Some(PrefixOperator::Minus),
        _ => None,
    }
}

pub(super) const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses a comma-separated list of expressions closed by `end`.
    ///
    /// Shared by array literals and call arguments. The current token is the
    /// opening delimiter; on success the closing one is current.
    pub(super) fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest));
        }

        self.expect_peek(end)?;
        Some(list)
    }

    /// Parses `(a, b, c)` parameter lists of function and macro literals.
    ///
    /// The current token is the opening parenthesis.
    pub(super) fn parse_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.current.literal.as_str()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.current.literal.as_str()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }
}
